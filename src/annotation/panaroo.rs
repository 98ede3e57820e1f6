use crate::annotation::fallback::FallbackChain;
use crate::core::{ClusterNameMap, ClusterRow};
use crate::utils::validation::is_blank;

/// Prefix of cluster identifiers that the pangenome tool generates for unnamed genes
const GENERATED_PREFIX: &str = "group_";

fn is_generated(name: &str) -> bool {
    name.starts_with(GENERATED_PREFIX)
}

/// First non-empty, non-generated name in a `;`-separated name list
fn first_named(non_unique: Option<&str>) -> Option<&str> {
    non_unique
        .filter(|s| !is_blank(s))?
        .split(';')
        .map(str::trim)
        .find(|part| !part.is_empty() && !is_generated(part))
}

/// First word of an annotation, unless it is blank or a hypothetical protein
fn annotation_word(annotation: Option<&str>) -> Option<&str> {
    annotation
        .filter(|a| !is_blank(a))
        .filter(|a| !a.to_lowercase().starts_with("hypothetical"))?
        .split_whitespace()
        .next()
}

/// Short display name for one cluster.
///
/// Uses the first real name among the non-unique names, else the first word of
/// the annotation, else the cluster identifier itself.
pub fn cluster_display_name(row: &ClusterRow) -> &str {
    FallbackChain::new()
        .offer(first_named(row.non_unique_name.as_deref()), is_generated)
        .offer(annotation_word(row.annotation.as_deref()), is_generated)
        .resolve(&row.cluster_id)
}

/// Map every cluster identifier to its short display name.
///
/// If an identifier appears on more than one row, the last row wins.
pub fn build_name_map(rows: &[ClusterRow]) -> ClusterNameMap {
    rows.iter()
        .map(|row| (row.cluster_id.clone(), cluster_display_name(row).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_unique_name_skips_generated() {
        let row = ClusterRow::new("group_500").with_non_unique_name("group_500; rplL ;rplK");
        assert_eq!(cluster_display_name(&row), "rplL");
    }

    #[test]
    fn test_hypothetical_falls_back_to_id() {
        let row = ClusterRow::new("group_77")
            .with_non_unique_name("")
            .with_annotation("hypothetical protein");
        assert_eq!(cluster_display_name(&row), "group_77");

        let row = ClusterRow::new("group_78").with_annotation("Hypothetical protein YbaB");
        assert_eq!(cluster_display_name(&row), "group_78");
    }

    #[test]
    fn test_annotation_first_word() {
        let row = ClusterRow::new("group_12")
            .with_non_unique_name("group_12")
            .with_annotation("ATP synthase subunit");
        assert_eq!(cluster_display_name(&row), "ATP");
    }

    #[test]
    fn test_generated_annotation_word_falls_back() {
        let row = ClusterRow::new("group_9").with_annotation("group_3 homolog");
        assert_eq!(cluster_display_name(&row), "group_9");
    }

    #[test]
    fn test_nan_treated_as_blank() {
        let row = ClusterRow::new("rplL")
            .with_non_unique_name("NaN")
            .with_annotation("nan");
        assert_eq!(cluster_display_name(&row), "rplL");
    }

    #[test]
    fn test_hypothetical_prefix_checked_as_written() {
        let row = ClusterRow::new("group_6").with_annotation(" hypothetical protein");
        assert_eq!(cluster_display_name(&row), "hypothetical");
    }

    #[test]
    fn test_null_markers_treated_as_blank() {
        let row = ClusterRow::new("group_5")
            .with_non_unique_name("None")
            .with_annotation("NULL");
        assert_eq!(cluster_display_name(&row), "group_5");
    }

    #[test]
    fn test_build_name_map_last_row_wins() {
        let rows = vec![
            ClusterRow::new("group_1").with_non_unique_name("abcA"),
            ClusterRow::new("group_2").with_annotation("Transposase IS200"),
            ClusterRow::new("group_1").with_non_unique_name("abcB"),
        ];
        let map = build_name_map(&rows);
        assert_eq!(map.len(), 2);
        assert_eq!(map["group_1"], "abcB");
        assert_eq!(map["group_2"], "Transposase");
    }
}
