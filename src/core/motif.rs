use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::utils::validation::is_nucleotide_motif;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MotifError {
    #[error("Empty motif for principal component index {0}")]
    Empty(usize),

    #[error("Motif '{motif}' contains characters outside the nucleotide alphabet")]
    InvalidAlphabet { motif: String },
}

/// Unitigs grouped by 0-based principal-component index.
///
/// Groups and the motifs within them iterate in sorted order so that every run
/// over the same input visits them identically. A group only exists once it holds
/// at least one motif, and every motif is non-empty and upper-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotifGroups {
    groups: BTreeMap<usize, BTreeSet<String>>,
}

impl MotifGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a motif under a principal-component index.
    ///
    /// Returns `Ok(true)` if the motif was new to the group.
    ///
    /// # Errors
    ///
    /// Returns `MotifError::Empty` for an empty motif, or
    /// `MotifError::InvalidAlphabet` if it is not a nucleotide string.
    pub fn insert(&mut self, pc_index: usize, motif: &str) -> Result<bool, MotifError> {
        let motif = motif.trim();
        if motif.is_empty() {
            return Err(MotifError::Empty(pc_index));
        }
        if !is_nucleotide_motif(motif) {
            return Err(MotifError::InvalidAlphabet {
                motif: motif.to_string(),
            });
        }

        Ok(self
            .groups
            .entry(pc_index)
            .or_default()
            .insert(motif.to_ascii_uppercase()))
    }

    /// Iterate `(pc_index, motifs)` in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<String>)> {
        self.groups.iter().map(|(idx, motifs)| (*idx, motifs))
    }

    /// Number of principal-component groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of motifs across all groups
    pub fn motif_count(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }
}
