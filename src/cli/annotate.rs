use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use crate::annotation::{annotate_occurrences, build_name_map, GeneAnnotation};
use crate::cli::locate::load_motifs;
use crate::cli::{OutputFormat, SearchArgs};
use crate::core::ClusterNameMap;
use crate::parsing;
use crate::parsing::reference::load_sources;
use crate::search::{LocatorConfig, MotifLocator};

#[derive(Args)]
pub struct AnnotateArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Pangenome gene presence/absence CSV used to shorten cluster identifiers
    #[arg(long)]
    pub panaroo: Option<PathBuf>,
}

/// Execute annotate subcommand
///
/// # Errors
///
/// Returns an error if the motif file or presence/absence table cannot be
/// parsed, or output fails. Unreadable or empty reference files are reported as
/// warnings and skipped.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AnnotateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let groups = load_motifs(&args.search, verbose)?;

    let names: Option<ClusterNameMap> = match &args.panaroo {
        Some(path) => {
            let rows = parsing::panaroo::read_presence_absence_file(path)?;
            if verbose {
                eprintln!("Loaded names for {} pangenome clusters", rows.len());
            }
            Some(build_name_map(&rows))
        }
        None => None,
    };

    let mut loaded = load_sources(&args.search.references, args.search.input_format);
    for issue in loaded.issues.drain(..) {
        warn!("{issue}");
    }

    let records = loaded.into_records();
    for record in records.iter().filter(|r| !r.is_annotated()) {
        info!(
            "Record {} has no annotated features; its hits will have no genes",
            record.id
        );
    }

    let config = LocatorConfig {
        parallel: args.search.parallel,
    };
    let occurrences = MotifLocator::with_config(&groups, config).occurrences(&records);
    let annotated = annotate_occurrences(&records, occurrences, names.as_ref());

    if annotated.is_empty() && !matches!(format, OutputFormat::Json) {
        eprintln!("No unitig hits found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&annotated),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&annotated)?),
        OutputFormat::Tsv => print_tsv_results(&annotated),
    }

    Ok(())
}

fn print_text_results(annotated: &[GeneAnnotation]) {
    for a in annotated {
        let occ = &a.occurrence;
        let genes = if a.genes.is_empty() {
            "intergenic".to_string()
        } else {
            a.genes.join(", ")
        };
        // 1-based inclusive coordinates for display
        println!(
            "PC{:<4} {:<40} {}:{}-{}({})  {}",
            occ.hit.pc,
            occ.hit.unitig,
            occ.hit.reference,
            occ.start + 1,
            occ.end,
            occ.strand(),
            genes
        );
    }
}

fn print_tsv_results(annotated: &[GeneAnnotation]) {
    println!("pc\tunitig\treference\tstart\tend\tstrand\tgenes");
    for a in annotated {
        let occ = &a.occurrence;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            occ.hit.pc,
            occ.hit.unitig,
            occ.hit.reference,
            occ.start,
            occ.end,
            occ.strand(),
            a.genes.join(";")
        );
    }
}
