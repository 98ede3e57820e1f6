use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel returned for a qualifier that a feature does not carry
pub const MISSING_QUALIFIER: &str = "?";

/// Feature type tag from an annotated record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Gene,
    Cds,
    Other(String),
}

impl FeatureKind {
    /// Parse a feature key as it appears in a GenBank feature table
    pub fn parse(s: &str) -> Self {
        match s {
            "gene" => FeatureKind::Gene,
            "CDS" => FeatureKind::Cds,
            other => FeatureKind::Other(other.to_string()),
        }
    }

    /// Whether this feature describes a gene or a coding region
    pub fn is_genic(&self) -> bool {
        matches!(self, FeatureKind::Gene | FeatureKind::Cds)
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gene => write!(f, "gene"),
            Self::Cds => write!(f, "CDS"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// An annotated interval on a reference sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub kind: FeatureKind,

    /// 0-based start
    pub start: usize,

    /// 0-based, exclusive end
    pub end: usize,

    /// Qualifier name to its values, in file order
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub qualifiers: BTreeMap<String, Vec<String>>,
}

impl Feature {
    /// Create a feature with no qualifiers. `start` and `end` are swapped if given
    /// out of order so that `start <= end` always holds.
    pub fn new(kind: FeatureKind, start: usize, end: usize) -> Self {
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        Self {
            kind,
            start,
            end,
            qualifiers: BTreeMap::new(),
        }
    }

    /// Append a qualifier value
    #[must_use]
    pub fn with_qualifier(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_qualifier(name, value);
        self
    }

    pub fn push_qualifier(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.qualifiers
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// First value of the named qualifier, or [`MISSING_QUALIFIER`] if absent
    pub fn qualifier(&self, name: &str) -> &str {
        self.qualifiers
            .get(name)
            .and_then(|values| values.first())
            .map_or(MISSING_QUALIFIER, String::as_str)
    }
}

/// A reference sequence loaded from a FASTA or GenBank source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Record identifier (FASTA name or GenBank accession)
    pub id: String,

    /// Raw nucleotide sequence, as read
    #[serde(skip)]
    pub sequence: Vec<u8>,

    /// Annotated features; empty for FASTA sources
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
}

impl ReferenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
            features: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.features = features;
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Whether this record carries any annotation to resolve genes against
    pub fn is_annotated(&self) -> bool {
        !self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_kind_parse() {
        assert_eq!(FeatureKind::parse("gene"), FeatureKind::Gene);
        assert_eq!(FeatureKind::parse("CDS"), FeatureKind::Cds);
        assert_eq!(
            FeatureKind::parse("tRNA"),
            FeatureKind::Other("tRNA".to_string())
        );
        // GenBank keys are case-sensitive
        assert!(!FeatureKind::parse("cds").is_genic());
    }

    #[test]
    fn test_qualifier_sentinel() {
        let feature = Feature::new(FeatureKind::Gene, 10, 20)
            .with_qualifier("locus_tag", "LT_0001")
            .with_qualifier("locus_tag", "LT_0001b");

        assert_eq!(feature.qualifier("locus_tag"), "LT_0001");
        assert_eq!(feature.qualifier("gene"), MISSING_QUALIFIER);
    }

    #[test]
    fn test_feature_new_orders_bounds() {
        let feature = Feature::new(FeatureKind::Cds, 30, 5);
        assert_eq!((feature.start, feature.end), (5, 30));
    }
}
