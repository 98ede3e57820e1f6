//! Gene naming for located unitigs and pangenome clusters.
//!
//! - [`overlap::overlaps`]: gene/CDS features touching an interval
//! - [`names::extract_names`]: one display name per overlapping feature
//! - [`panaroo::build_name_map`]: short names for pangenome cluster identifiers
//! - [`genes::annotate_occurrences`]: the genes each located unitig falls in
//!
//! Both naming schemes walk an ordered list of candidate names and take the first
//! one that is not excluded, which [`fallback::FallbackChain`] implements once.

pub mod fallback;
pub mod genes;
pub mod names;
pub mod overlap;
pub mod panaroo;

pub use fallback::FallbackChain;
pub use genes::{annotate_occurrences, GeneAnnotation};
pub use names::{extract_names, UNKNOWN_GENE};
pub use overlap::overlaps;
pub use panaroo::build_name_map;
