//! Loading reference sources with per-source failure isolation.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::core::ReferenceRecord;
use crate::parsing::fasta::{is_fasta_file, read_fasta_file};
use crate::parsing::genbank::{is_genbank_file, read_genbank_file};
use crate::parsing::ParseError;

/// Format of a reference source
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceFormat {
    /// Detect from the file extension
    #[default]
    Auto,
    Fasta,
    Genbank,
}

impl SourceFormat {
    /// Resolve `Auto` against a path. Unknown extensions are read as FASTA.
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto if is_genbank_file(path) => Self::Genbank,
            Self::Auto if is_fasta_file(path) => Self::Fasta,
            Self::Auto => Self::Fasta,
            explicit => explicit,
        }
    }
}

/// Read every record of a reference source
///
/// # Errors
///
/// Returns the FASTA or GenBank parser's error.
pub fn read_records(
    path: &Path,
    format: SourceFormat,
) -> Result<Vec<ReferenceRecord>, ParseError> {
    match format.resolve(path) {
        SourceFormat::Genbank => read_genbank_file(path),
        SourceFormat::Fasta | SourceFormat::Auto => read_fasta_file(path),
    }
}

/// Why a reference source contributed no records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum SourceIssueKind {
    /// The source could not be read or parsed
    ParseFailed(String),
    /// The source parsed but held no records
    Empty,
}

/// A recoverable problem with one reference source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceIssue {
    pub source: PathBuf,
    #[serde(flatten)]
    pub kind: SourceIssueKind,
}

impl std::fmt::Display for SourceIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            SourceIssueKind::ParseFailed(message) => {
                write!(f, "Could not parse {}: {message}", self.source.display())
            }
            SourceIssueKind::Empty => {
                write!(f, "No records in {}, skipping", self.source.display())
            }
        }
    }
}

/// Records read from one source
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub path: PathBuf,
    pub records: Vec<ReferenceRecord>,
}

/// Outcome of loading several sources: the ones that produced records, and an
/// issue for each one that did not
#[derive(Debug, Clone, Default)]
pub struct LoadedSources {
    pub sources: Vec<LoadedSource>,
    pub issues: Vec<SourceIssue>,
}

impl LoadedSources {
    /// Take all loaded records, in source order
    pub fn into_records(self) -> Vec<ReferenceRecord> {
        let mut records = Vec::new();
        for source in self.sources {
            for record in &source.records {
                debug!(
                    "Record {} ({} bp) from {}",
                    record.id,
                    record.len(),
                    source.path.display()
                );
            }
            records.extend(source.records);
        }
        records
    }
}

/// Load each source independently.
///
/// A source that fails to parse, or parses to no records, becomes a
/// [`SourceIssue`] and does not stop the others from loading.
pub fn load_sources<P: AsRef<Path>>(paths: &[P], format: SourceFormat) -> LoadedSources {
    let mut loaded = LoadedSources::default();

    for path in paths {
        let path = path.as_ref();
        match read_records(path, format) {
            Ok(records) if records.is_empty() => loaded.issues.push(SourceIssue {
                source: path.to_path_buf(),
                kind: SourceIssueKind::Empty,
            }),
            Ok(records) => {
                debug!("Loaded {} records from {}", records.len(), path.display());
                loaded.sources.push(LoadedSource {
                    path: path.to_path_buf(),
                    records,
                });
            }
            Err(e) => loaded.issues.push(SourceIssue {
                source: path.to_path_buf(),
                kind: SourceIssueKind::ParseFailed(e.to_string()),
            }),
        }
    }

    loaded
}
