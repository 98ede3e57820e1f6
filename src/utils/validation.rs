//! Centralized validation and helper functions.

/// Maximum number of records accepted from a single reference source (DOS protection)
pub const MAX_RECORDS: usize = 100_000;

/// Maximum number of motif lines accepted from a single motif file (DOS protection)
pub const MAX_MOTIFS: usize = 1_000_000;

/// IUPAC nucleotide codes, including ambiguity codes and the gap-free `N`
const NUCLEOTIDE_CODES: &[u8] = b"ACGTUNRYSWKMBDHV";

/// Check that a motif is a non-empty string of IUPAC nucleotide codes (any case).
///
/// # Examples
///
/// ```
/// use unitig_locator::utils::validation::is_nucleotide_motif;
///
/// assert!(is_nucleotide_motif("ACGTN"));
/// assert!(is_nucleotide_motif("acgtryk"));
/// assert!(!is_nucleotide_motif(""));
/// assert!(!is_nucleotide_motif("ACGT-"));
/// ```
#[must_use]
pub fn is_nucleotide_motif(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| NUCLEOTIDE_CODES.contains(&b.to_ascii_uppercase()))
}

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    check_limit(count, MAX_RECORDS, "records")
}

/// Check if adding another motif would exceed the maximum allowed.
#[must_use]
pub fn check_motif_limit(count: usize) -> Option<String> {
    check_limit(count, MAX_MOTIFS, "motifs")
}

fn check_limit(count: usize, max: usize, what: &str) -> Option<String> {
    if count >= max {
        Some(format!(
            "Too many {what}: adding another would exceed maximum of {max}"
        ))
    } else {
        None
    }
}

/// Textual markers that spreadsheet and dataframe exports write for missing cells
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Treat empty strings and textual missing-value markers as blank.
///
/// Markers are matched case-insensitively against the trimmed value, so `NA`,
/// `NULL`, `None` and `#N/A` all count as blank.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.is_empty()
        || MISSING_MARKERS
            .iter()
            .any(|marker| trimmed.eq_ignore_ascii_case(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_limit() {
        assert!(check_record_limit(0).is_none());
        assert!(check_record_limit(MAX_RECORDS - 1).is_none());
        assert!(check_record_limit(MAX_RECORDS).is_some());
    }

    #[test]
    fn test_motif_limit_message() {
        let msg = check_motif_limit(MAX_MOTIFS).unwrap();
        assert!(msg.contains("motifs"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("nan"));
        assert!(is_blank(" NaN "));
        assert!(!is_blank("rplL"));
        assert!(!is_blank("nanA"));
    }

    #[test]
    fn test_is_blank_missing_markers() {
        for marker in ["NA", "n/a", "N/A", "NULL", "null", "None", "<NA>", "#N/A", "-nan"] {
            assert!(is_blank(marker), "{marker} should be blank");
        }
        assert!(!is_blank("NAD"));
        assert!(!is_blank("nusA"));
    }
}
