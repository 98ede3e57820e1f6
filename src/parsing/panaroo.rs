//! Reader for pangenome gene presence/absence tables (Panaroo/Roary
//! `gene_presence_absence.csv`).
//!
//! Only the three naming columns are kept; per-genome columns are ignored. The
//! table is rejected as a whole if a required column is missing, a row is ragged,
//! or a cluster identifier is blank.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::core::ClusterRow;
use crate::parsing::ParseError;
use crate::utils::validation::is_blank;

pub const CLUSTER_COLUMN: &str = "Gene";
pub const NON_UNIQUE_NAME_COLUMN: &str = "Non-unique Gene name";
pub const ANNOTATION_COLUMN: &str = "Annotation";

/// Read the naming columns of a presence/absence CSV file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, or any error from
/// [`read_presence_absence`].
pub fn read_presence_absence_file(path: &Path) -> Result<Vec<ClusterRow>, ParseError> {
    let file = std::fs::File::open(path)?;
    read_presence_absence(file)
}

/// Read the naming columns of a presence/absence CSV
///
/// # Errors
///
/// Returns `ParseError::MissingColumn` if a naming column is absent from the
/// header, `ParseError::Csv` for malformed or ragged rows, or
/// `ParseError::InvalidFormat` for a row with a blank cluster identifier.
pub fn read_presence_absence<R: Read>(reader: R) -> Result<Vec<ClusterRow>, ParseError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| ParseError::MissingColumn(name.to_string()))
    };
    let cluster_col = column(CLUSTER_COLUMN)?;
    let non_unique_col = column(NON_UNIQUE_NAME_COLUMN)?;
    let annotation_col = column(ANNOTATION_COLUMN)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;

        // Header is line 1
        let line_num = i + 2;

        let cluster_id = record.get(cluster_col).unwrap_or_default().trim();
        if is_blank(cluster_id) {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has a missing '{CLUSTER_COLUMN}' value"
            )));
        }

        let optional = |col: usize| {
            record
                .get(col)
                .filter(|value| !is_blank(value))
                .map(str::to_string)
        };

        rows.push(ClusterRow {
            cluster_id: cluster_id.to_string(),
            non_unique_name: optional(non_unique_col),
            annotation: optional(annotation_col),
        });
    }

    Ok(rows)
}
