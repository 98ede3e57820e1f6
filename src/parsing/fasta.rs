//! Parser for FASTA files using noodles.
//!
//! Reads named sequences from FASTA files. Supports both uncompressed and
//! gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna`, `.ffn`, `.fas` (uncompressed)
//! - any of the above with `.gz` or `.bgz` appended

use std::io::BufRead;
use std::path::Path;

use noodles::fasta;

use crate::core::ReferenceRecord;
use crate::parsing::{open_reader, uncompressed_name, ParseError};
use crate::utils::validation::check_record_limit;

const FASTA_EXTENSIONS: &[&str] = &["fa", "fasta", "fna", "ffn", "fas"];

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let name = uncompressed_name(path);
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| FASTA_EXTENSIONS.contains(&ext))
}

/// Read every record of a FASTA file.
///
/// An empty file yields an empty list; deciding whether that is a problem is left
/// to the caller.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, or `ParseError::TooManyRecords` if the limit is exceeded.
pub fn read_fasta_file(path: &Path) -> Result<Vec<ReferenceRecord>, ParseError> {
    let mut reader = fasta::io::Reader::new(open_reader(path)?);
    read_fasta(&mut reader)
}

/// Read every record from a noodles FASTA reader
pub fn read_fasta<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<ReferenceRecord>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Check record limit for DOS protection
        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = record.sequence().as_ref().to_vec();

        records.push(ReferenceRecord::new(name, sequence));
    }

    Ok(records)
}
