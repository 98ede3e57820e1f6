//! Parsers for reference sequences, unitig groups and pangenome tables.
//!
//! This module provides parsers for:
//!
//! - **FASTA files**: Reference sequences without annotation (via noodles)
//! - **GenBank files**: Annotated reference sequences with gene/CDS features (via gb-io)
//! - **Motif TSV files**: Unitigs grouped by principal-component index
//! - **Presence/absence CSV files**: Pangenome cluster naming columns
//!
//! Reference files may be gzip or bgzip compressed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use unitig_locator::parsing::reference::{read_records, SourceFormat};
//!
//! let records = read_records(Path::new("genome.gbff.gz"), SourceFormat::Auto).unwrap();
//! for record in &records {
//!     println!("{}: {} bp, {} features", record.id, record.len(), record.features.len());
//! }
//! ```
//!
//! ## Motif File Columns
//!
//! | Column | Description | Required |
//! |--------|-------------|----------|
//! | 1      | 0-based principal-component index | Yes |
//! | 2      | Unitig sequence | Yes |

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

use crate::core::MotifError;

pub mod fasta;
pub mod genbank;
pub mod motifs;
pub mod panaroo;
pub mod reference;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("GenBank error: {0}")]
    GenBank(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid motif on line {line}: {source}")]
    Motif {
        line: usize,
        #[source]
        source: MotifError,
    },

    #[error("Too many records: {0} exceeds maximum allowed (100000)")]
    TooManyRecords(usize),

    #[error("Too many motifs: {0} exceeds maximum allowed (1000000)")]
    TooManyMotifs(usize),
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub(crate) fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Lowercased file name with any compression suffix removed
pub(crate) fn uncompressed_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    name.strip_suffix(".gz")
        .or_else(|| name.strip_suffix(".bgz"))
        .map_or_else(|| name.clone(), str::to_string)
}

/// Open a file for buffered reading, decompressing gzip/bgzip transparently.
///
/// bgzip files are a series of gzip members, so a multi-member decoder is used.
pub(crate) fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
