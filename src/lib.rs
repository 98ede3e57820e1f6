//! # unitig-locator
//!
//! A library for finding unitigs in reference genomes and naming the genes they
//! fall in.
//!
//! Association studies on bacterial pangenomes often produce lists of unitigs
//! (short assembly-graph sequences) grouped by the principal component that
//! selected them. On their own these are just strings of bases; to interpret them
//! you need to know where they occur in a reference and which genes they touch.
//!
//! `unitig-locator` answers that by scanning every reference record on both
//! strands for every unitig and its reverse complement, and by resolving each
//! hit against the record's gene annotation.
//!
//! ## Features
//!
//! - **Exhaustive search**: Every occurrence is reported, overlapping ones included
//! - **Strand aware**: Four scans per unitig cover both reference strands and both
//!   unitig orientations
//! - **Gene naming**: Hits are resolved to gene symbols, locus tags or products
//! - **Pangenome names**: Cluster identifiers from a presence/absence table are
//!   mapped to short gene names
//! - **Source isolation**: A broken or empty reference file is reported and skipped
//!
//! ## Example
//!
//! ```rust
//! use unitig_locator::{MotifGroups, MotifLocator, ReferenceRecord};
//!
//! let mut groups = MotifGroups::new();
//! groups.insert(0, "ACGT").unwrap();
//!
//! let records = vec![ReferenceRecord::new("ref1", b"ACGTACGTTT".to_vec())];
//! let locator = MotifLocator::new(&groups);
//!
//! for hit in locator.locate(&records) {
//!     println!("PC{} {} {}", hit.pc, hit.unitig, hit.reference);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for records, features, unitig groups and hits
//! - [`search`]: Occurrence search, reverse complement and the motif locator
//! - [`annotation`]: Gene overlap, gene naming and pangenome cluster naming
//! - [`parsing`]: Parsers for FASTA, GenBank, motif TSV and presence/absence CSV files
//! - [`cli`]: Command-line interface implementation

pub mod annotation;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod search;
pub mod utils;

// Re-export commonly used types for convenience
pub use annotation::{annotate_occurrences, build_name_map, extract_names, overlaps};
pub use crate::core::{
    ClusterNameMap, ClusterRow, Feature, FeatureKind, Hit, MotifGroups, Occurrence, OverlapHit,
    ReferenceRecord, Strand,
};
pub use search::{
    find_occurrences, reverse_complement, LocateReport, LocatorConfig, MotifLocator,
};
