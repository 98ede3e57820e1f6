//! Parser for GenBank flat files using gb-io.
//!
//! Each GenBank entry becomes a [`ReferenceRecord`] whose features keep their type,
//! outer bounds and qualifiers. Joined or complemented locations are reduced to
//! the span between their first and last base.

use std::io::Read;
use std::path::Path;

use gb_io::reader::SeqReader;
use tracing::debug;

use crate::core::{Feature, FeatureKind, ReferenceRecord};
use crate::parsing::{open_reader, uncompressed_name, ParseError};
use crate::utils::validation::check_record_limit;

const GENBANK_EXTENSIONS: &[&str] = &["gb", "gbk", "gbff", "genbank"];

/// Check if the path has a GenBank extension
pub fn is_genbank_file(path: &Path) -> bool {
    let name = uncompressed_name(path);
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| GENBANK_EXTENSIONS.contains(&ext))
}

/// Read every entry of a GenBank file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::GenBank` if
/// parsing fails, or `ParseError::TooManyRecords` if the limit is exceeded.
pub fn read_genbank_file(path: &Path) -> Result<Vec<ReferenceRecord>, ParseError> {
    read_genbank(open_reader(path)?)
}

/// Read every entry from GenBank text
pub fn read_genbank<R: Read>(reader: R) -> Result<Vec<ReferenceRecord>, ParseError> {
    let mut records = Vec::new();

    for result in SeqReader::new(reader) {
        let seq = result.map_err(|e| ParseError::GenBank(e.to_string()))?;

        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        let id = seq
            .version
            .clone()
            .or_else(|| seq.accession.clone())
            .or_else(|| seq.name.clone())
            .unwrap_or_else(|| format!("record_{}", records.len() + 1));

        let features: Vec<Feature> = seq.features.iter().filter_map(convert_feature).collect();
        debug!(
            "GenBank record {id}: {} bp, {} features",
            seq.seq.len(),
            features.len()
        );

        records.push(ReferenceRecord::new(id, seq.seq).with_features(features));
    }

    Ok(records)
}

/// Convert a gb-io feature, dropping those whose location has no usable bounds
fn convert_feature(feature: &gb_io::seq::Feature) -> Option<Feature> {
    let (start, end) = feature.location.find_bounds().ok()?;
    let start = usize::try_from(start).ok()?;
    let end = usize::try_from(end).ok()?;

    let kind = FeatureKind::parse(&feature.kind.to_string());
    let mut converted = Feature::new(kind, start, end);
    for (key, value) in &feature.qualifiers {
        if let Some(value) = value {
            converted.push_qualifier(key.to_string(), value.clone());
        }
    }

    Some(converted)
}
