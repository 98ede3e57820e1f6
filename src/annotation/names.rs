use crate::annotation::fallback::FallbackChain;
use crate::core::{OverlapHit, MISSING_QUALIFIER};

/// Name used when a feature has no gene symbol, locus tag or product
pub const UNKNOWN_GENE: &str = "Unknown";

fn is_missing(value: &str) -> bool {
    value == MISSING_QUALIFIER
}

/// Display name for one overlapping feature: gene symbol, else locus tag, else
/// product, else [`UNKNOWN_GENE`]
pub fn display_name(hit: &OverlapHit) -> &str {
    FallbackChain::new()
        .offer(Some(hit.gene.as_str()), is_missing)
        .offer(Some(hit.locus_tag.as_str()), is_missing)
        .offer(Some(hit.product.as_str()), is_missing)
        .resolve(UNKNOWN_GENE)
}

/// One display name per overlap hit, in the same order
pub fn extract_names(hits: &[OverlapHit]) -> Vec<String> {
    hits.iter().map(|h| display_name(h).to_string()).collect()
}
