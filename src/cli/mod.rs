//! Command-line interface for unitig-locator.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **locate**: Find every hit of every unitig in reference files
//! - **annotate**: Locate unitigs and name the genes each hit falls in
//! - **names**: Map pangenome cluster identifiers to short gene names
//!
//! ## Usage
//!
//! ```text
//! # Locate unitigs in FASTA references
//! unitig-locator locate --motifs unitigs.tsv genome1.fa genome2.fa.gz
//!
//! # One line per unitig and reference with the raw hit count
//! unitig-locator locate --motifs unitigs.tsv genome1.fa --summary
//!
//! # Resolve hits to genes in an annotated reference
//! unitig-locator annotate --motifs unitigs.tsv reference.gbff --panaroo gene_presence_absence.csv
//!
//! # JSON output for scripting
//! unitig-locator names gene_presence_absence.csv --format json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::parsing::reference::SourceFormat;

pub mod annotate;
pub mod locate;
pub mod names;

#[derive(Parser)]
#[command(name = "unitig-locator")]
#[command(version)]
#[command(about = "Locate unitigs in reference genomes and name the genes they hit")]
#[command(
    long_about = "unitig-locator finds where unitigs selected by an upstream association or PCA step occur in reference genomes.\n\nEach unitig is searched on both strands in both orientations, and every occurrence is reported:\n- Hits per principal component, unitig and reference\n- Overlapping gene/CDS names from GenBank annotation\n- Short gene names for pangenome cluster identifiers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find every hit of every unitig in reference files
    Locate(locate::LocateArgs),

    /// Locate unitigs and name the genes each hit overlaps
    Annotate(annotate::AnnotateArgs),

    /// Map pangenome cluster identifiers to short gene names
    Names(names::NamesArgs),
}

/// Arguments shared by the commands that search reference files
#[derive(Args)]
pub struct SearchArgs {
    /// Unitig file: tab-separated 0-based principal component index and unitig
    #[arg(short, long, required = true)]
    pub motifs: PathBuf,

    /// Reference files (FASTA or GenBank, optionally gzip/bgzip compressed)
    #[arg(required = true)]
    pub references: Vec<PathBuf>,

    /// Reference format (detected from the extension by default)
    #[arg(long, value_enum, default_value = "auto")]
    pub input_format: SourceFormat,

    /// Search reference records in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
