//! Strand-aware unitig search.
//!
//! This module provides the search core:
//!
//! - [`occurrences::find_occurrences`]: every start position of a pattern in a text,
//!   overlaps included
//! - [`strand::reverse_complement`]: upper-cased reverse complement of a sequence
//! - [`MotifLocator`]: runs both searches over every record and unitig
//!
//! ## Search Scheme
//!
//! For each reference record and each unitig, four scans are made:
//!
//! 1. unitig against the forward strand
//! 2. reverse-complemented unitig against the forward strand
//! 3. unitig against the reverse-complement strand
//! 4. reverse-complemented unitig against the reverse-complement strand
//!
//! Every position from every scan yields one hit. Hits are not merged, so a
//! palindromic unitig is reported by more than one scan at the same site.
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
//! let hits = MotifLocator::new(&groups).locate(&records);
//!
//! assert!(hits.iter().all(|h| h.pc == 1 && h.reference == "ref1"));
//! ```

pub mod locator;
pub mod occurrences;
pub mod strand;

pub use locator::{summarize, HitCount, LocateReport, LocatorConfig, MotifLocator};
pub use occurrences::{find_occurrences, Occurrences};
pub use strand::reverse_complement;
