use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Mapping from pangenome cluster identifier to a short display name
pub type ClusterNameMap = HashMap<String, String>;

/// A unitig found in a reference record.
///
/// One hit is produced per occurrence per scan, so a single site can yield several
/// hits (for example a palindromic unitig matching on both strands).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hit {
    /// 1-based principal-component label
    pub pc: usize,

    /// The unitig as it appears in the motif groups
    pub unitig: String,

    /// Identifier of the reference record it was found in
    pub reference: String,
}

impl Hit {
    /// Build a hit from a 0-based principal-component index
    pub fn from_index(
        pc_index: usize,
        unitig: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            pc: pc_index + 1,
            unitig: unitig.into(),
            reference: reference.into(),
        }
    }
}

/// Reference strand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    Forward,
    Reverse,
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

/// One of the four searches performed for each unitig and record, in search order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scan {
    /// Unitig against the forward strand
    ForwardUnitig,
    /// Reverse-complemented unitig against the forward strand
    ForwardRevcomp,
    /// Unitig against the reverse-complement strand
    ReverseUnitig,
    /// Reverse-complemented unitig against the reverse-complement strand
    ReverseRevcomp,
}

impl Scan {
    pub const ALL: [Scan; 4] = [
        Scan::ForwardUnitig,
        Scan::ForwardRevcomp,
        Scan::ReverseUnitig,
        Scan::ReverseRevcomp,
    ];

    /// Whether this scan searches the reverse-complement strand of the reference
    pub fn searches_reverse(self) -> bool {
        matches!(self, Scan::ReverseUnitig | Scan::ReverseRevcomp)
    }

    /// Whether this scan searches for the reverse complement of the unitig
    pub fn uses_revcomp(self) -> bool {
        matches!(self, Scan::ForwardRevcomp | Scan::ReverseRevcomp)
    }

    /// Forward-strand orientation of the unitig itself for a match from this scan
    pub fn unitig_strand(self) -> Strand {
        if self.searches_reverse() == self.uses_revcomp() {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }
}

/// A hit together with where it was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    #[serde(flatten)]
    pub hit: Hit,

    pub scan: Scan,

    /// 0-based start on the forward strand
    pub start: usize,

    /// 0-based, exclusive end on the forward strand
    pub end: usize,
}

impl Occurrence {
    pub fn strand(&self) -> Strand {
        self.scan.unitig_strand()
    }
}

/// A gene or CDS feature overlapping a queried interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapHit {
    pub kind: String,
    pub start: usize,
    pub end: usize,
    pub locus_tag: String,
    pub gene: String,
    pub product: String,
}

/// One row of a pangenome presence/absence table, reduced to the naming columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRow {
    /// Cluster identifier (`Gene` column)
    pub cluster_id: String,

    /// Semicolon-separated gene names (`Non-unique Gene name` column)
    #[serde(default)]
    pub non_unique_name: Option<String>,

    /// Free-text annotation (`Annotation` column)
    #[serde(default)]
    pub annotation: Option<String>,
}

impl ClusterRow {
    pub fn new(cluster_id: impl Into<String>) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            non_unique_name: None,
            annotation: None,
        }
    }

    #[must_use]
    pub fn with_non_unique_name(mut self, name: impl Into<String>) -> Self {
        self.non_unique_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}
