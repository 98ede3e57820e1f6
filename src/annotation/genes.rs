use std::collections::HashMap;

use serde::Serialize;

use crate::annotation::names::extract_names;
use crate::annotation::overlap::overlaps;
use crate::core::{ClusterNameMap, Occurrence, OverlapHit, ReferenceRecord};

/// An occurrence together with the genes it falls in
#[derive(Debug, Clone, Serialize)]
pub struct GeneAnnotation {
    #[serde(flatten)]
    pub occurrence: Occurrence,

    /// Overlapping gene/CDS features, in feature order
    pub overlaps: Vec<OverlapHit>,

    /// One display name per overlapping feature
    pub genes: Vec<String>,
}

/// Resolve the genes each occurrence overlaps.
///
/// Occurrences are matched to records by identifier; if several records share an
/// identifier the first one is used. The query interval is the inclusive span of
/// the match, `[start, end - 1]`. When `names` is given, each gene name that is a
/// known cluster identifier is replaced by the cluster's display name.
pub fn annotate_occurrences(
    records: &[ReferenceRecord],
    occurrences: Vec<Occurrence>,
    names: Option<&ClusterNameMap>,
) -> Vec<GeneAnnotation> {
    let mut by_id: HashMap<&str, &ReferenceRecord> = HashMap::new();
    for record in records {
        by_id.entry(record.id.as_str()).or_insert(record);
    }

    occurrences
        .into_iter()
        .map(|occurrence| {
            let hits = by_id
                .get(occurrence.hit.reference.as_str())
                .map(|record| {
                    let last = occurrence.end.saturating_sub(1).max(occurrence.start);
                    overlaps(&record.features, occurrence.start, last)
                })
                .unwrap_or_default();

            let genes = extract_names(&hits)
                .into_iter()
                .map(|name| render_name(name, names))
                .collect();

            GeneAnnotation {
                occurrence,
                overlaps: hits,
                genes,
            }
        })
        .collect()
}

fn render_name(name: String, names: Option<&ClusterNameMap>) -> String {
    names
        .and_then(|map| map.get(&name))
        .cloned()
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feature, FeatureKind, Hit, Scan};

    fn record() -> ReferenceRecord {
        ReferenceRecord::new("NC_1", vec![b'A'; 300]).with_features(vec![
            Feature::new(FeatureKind::Gene, 100, 200).with_qualifier("locus_tag", "group_42"),
            Feature::new(FeatureKind::Cds, 150, 250).with_qualifier("gene", "abcA"),
        ])
    }

    fn occurrence(start: usize, end: usize) -> Occurrence {
        Occurrence {
            hit: Hit::from_index(0, "AAAA", "NC_1"),
            scan: Scan::ForwardUnitig,
            start,
            end,
        }
    }

    #[test]
    fn test_annotate_overlapping_genes() {
        let annotated = annotate_occurrences(
            &[record()],
            vec![occurrence(160, 164), occurrence(10, 14), occurrence(200, 204)],
            None,
        );

        assert_eq!(annotated[0].genes, vec!["group_42", "abcA"]);
        assert!(annotated[1].genes.is_empty());
        // Starting on the gene's end coordinate counts under the inclusive test
        assert_eq!(annotated[2].genes, vec!["group_42", "abcA"]);
    }

    #[test]
    fn test_match_ending_at_feature_start() {
        // Bases 96..100 end right before the gene begins at 100
        let annotated = annotate_occurrences(&[record()], vec![occurrence(96, 100)], None);
        assert!(annotated[0].genes.is_empty());
    }

    #[test]
    fn test_cluster_names_applied() {
        let mut names = ClusterNameMap::new();
        names.insert("group_42".to_string(), "rplL".to_string());

        let annotated =
            annotate_occurrences(&[record()], vec![occurrence(110, 114)], Some(&names));
        assert_eq!(annotated[0].genes, vec!["rplL"]);
        assert_eq!(annotated[0].overlaps[0].locus_tag, "group_42");
    }

    #[test]
    fn test_unknown_reference() {
        let mut occ = occurrence(110, 114);
        occ.hit.reference = "other".to_string();
        let annotated = annotate_occurrences(&[record()], vec![occ], None);
        assert!(annotated[0].overlaps.is_empty());
    }
}
