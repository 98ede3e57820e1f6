use std::path::Path;

use crate::core::MotifGroups;
use crate::parsing::ParseError;
use crate::utils::validation::check_motif_limit;

/// Parse a motif file with columns: pc index (0-based), unitig
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_motif_file(path: &Path) -> Result<MotifGroups, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_motif_text(&content)
}

/// Parse tab-separated motif text with columns: pc index (0-based), unitig
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if lines have fewer than 2 fields, an
/// invalid index, or no motifs are found, `ParseError::Motif` for an empty or
/// non-nucleotide unitig, or `ParseError::TooManyMotifs` if the limit is exceeded.
pub fn parse_motif_text(text: &str) -> Result<MotifGroups, ParseError> {
    let mut groups = MotifGroups::new();
    let mut lines_read = 0;
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        // Only strip line endings so that an empty unitig column is still seen
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();

        // Check if first non-empty/non-comment line is a header
        if first_data_line {
            first_data_line = false;
            let first = fields.first().map(|s| s.trim().to_lowercase()).unwrap_or_default();
            if first == "pc" || first == "pc_index" || first == "component" {
                continue;
            }
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if fields.len() < 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 2 fields"
            )));
        }

        let pc_index: usize = fields[0].trim().parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid principal component index on line {}: '{}'",
                line_num, fields[0]
            ))
        })?;

        // Check motif limit for DOS protection
        if check_motif_limit(lines_read).is_some() {
            return Err(ParseError::TooManyMotifs(lines_read));
        }

        groups
            .insert(pc_index, fields[1])
            .map_err(|source| ParseError::Motif {
                line: line_num,
                source,
            })?;
        lines_read += 1;
    }

    if groups.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No motifs found in file".to_string(),
        ));
    }

    Ok(groups)
}
