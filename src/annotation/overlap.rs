use crate::core::{Feature, OverlapHit};

/// Gene and CDS features that overlap the inclusive interval `[start, end]`.
///
/// A feature overlaps unless it ends before `start` or begins after `end`, so a
/// feature that only touches a boundary is included. Features of any other type
/// are skipped. Missing `locus_tag`, `gene` or `product` qualifiers are reported
/// as `?`. Output follows feature order.
pub fn overlaps(features: &[Feature], start: usize, end: usize) -> Vec<OverlapHit> {
    features
        .iter()
        .filter(|f| f.kind.is_genic())
        .filter(|f| !(f.end < start || f.start > end))
        .map(|f| OverlapHit {
            kind: f.kind.to_string(),
            start: f.start,
            end: f.end,
            locus_tag: f.qualifier("locus_tag").to_string(),
            gene: f.qualifier("gene").to_string(),
            product: f.qualifier("product").to_string(),
        })
        .collect()
}
