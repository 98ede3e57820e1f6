//! Core data types for unitig location and gene naming.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`ReferenceRecord`]: A named reference sequence, optionally with annotated features
//! - [`Feature`], [`FeatureKind`]: Annotated intervals with their qualifiers
//! - [`MotifGroups`]: Unitigs grouped under their principal-component index
//! - [`Hit`], [`Occurrence`]: Results of locating unitigs in references
//! - [`OverlapHit`]: A gene or CDS feature overlapping a query interval
//! - [`ClusterRow`]: The naming columns of a pangenome presence/absence table
//!
//! ## Coordinates
//!
//! All intervals are 0-based and end-exclusive on the forward strand, unless a
//! function documents otherwise. Principal components are stored by their 0-based
//! index and reported by their 1-based label.

pub mod motif;
pub mod record;
pub mod types;

pub use motif::{MotifError, MotifGroups};
pub use record::{Feature, FeatureKind, ReferenceRecord, MISSING_QUALIFIER};
pub use types::{ClusterNameMap, ClusterRow, Hit, Occurrence, OverlapHit, Scan, Strand};
