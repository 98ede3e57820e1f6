use std::collections::HashMap;
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::core::{Hit, MotifGroups, Occurrence, ReferenceRecord, Scan};
use crate::parsing::reference::{load_sources, SourceFormat, SourceIssue};
use crate::search::occurrences::find_occurrences;
use crate::search::strand::reverse_complement;

/// Configuration for the motif locator
#[derive(Debug, Clone, Default)]
pub struct LocatorConfig {
    /// Search reference records on the rayon thread pool. Output order is the same
    /// as a sequential run.
    pub parallel: bool,
}

/// Hits from a set of reference sources, along with the sources that contributed
/// nothing because they could not be read or were empty
#[derive(Debug, Clone, Default, Serialize)]
pub struct LocateReport {
    pub hits: Vec<Hit>,
    pub issues: Vec<SourceIssue>,
}

impl LocateReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// A unitig prepared for searching
struct PreparedMotif<'a> {
    pc_index: usize,
    unitig: &'a str,
    revcomp: Vec<u8>,
}

/// Locates every unitig of every principal component in reference records
pub struct MotifLocator<'a> {
    motifs: Vec<PreparedMotif<'a>>,
    config: LocatorConfig,
}

impl<'a> MotifLocator<'a> {
    /// Create a locator with default (sequential) configuration
    pub fn new(groups: &'a MotifGroups) -> Self {
        Self::with_config(groups, LocatorConfig::default())
    }

    pub fn with_config(groups: &'a MotifGroups, config: LocatorConfig) -> Self {
        let motifs = groups
            .iter()
            .flat_map(|(pc_index, unitigs)| {
                unitigs.iter().map(move |unitig| PreparedMotif {
                    pc_index,
                    unitig: unitig.as_str(),
                    revcomp: reverse_complement(unitig.as_bytes()),
                })
            })
            .collect();

        Self { motifs, config }
    }

    /// Find every hit of every unitig in the given records.
    ///
    /// Hits are ordered by record, then principal component, then unitig, then
    /// scan, then position. Running twice on the same input gives the same list.
    pub fn locate(&self, records: &[ReferenceRecord]) -> Vec<Hit> {
        self.per_record(records, |record| {
            let mut hits = Vec::new();
            self.scan_record(record, |motif, _scan, _start| {
                hits.push(Hit::from_index(motif.pc_index, motif.unitig, &record.id));
            });
            hits
        })
    }

    /// Like [`locate`](Self::locate), but keep where each hit was found.
    ///
    /// Positions are projected onto the forward strand, so a match found on the
    /// reverse-complement strand reports the forward interval it covers.
    pub fn occurrences(&self, records: &[ReferenceRecord]) -> Vec<Occurrence> {
        self.per_record(records, |record| {
            let len = record.len();
            let mut found = Vec::new();
            self.scan_record(record, |motif, scan, pos| {
                let width = motif.unitig.len();
                let start = if scan.searches_reverse() {
                    len - pos - width
                } else {
                    pos
                };
                found.push(Occurrence {
                    hit: Hit::from_index(motif.pc_index, motif.unitig, &record.id),
                    scan,
                    start,
                    end: start + width,
                });
            });
            found
        })
    }

    /// Load each source and locate unitigs in its records.
    ///
    /// A source that cannot be parsed or holds no records contributes no hits and
    /// is reported in [`LocateReport::issues`]; the remaining sources are still
    /// searched.
    pub fn locate_sources<P: AsRef<Path>>(
        &self,
        sources: &[P],
        format: SourceFormat,
    ) -> LocateReport {
        let mut loaded = load_sources(sources, format);
        let issues = std::mem::take(&mut loaded.issues);
        let records = loaded.into_records();

        LocateReport {
            hits: self.locate(&records),
            issues,
        }
    }

    /// Run all four scans of every unitig against one record
    fn scan_record<F>(&self, record: &ReferenceRecord, mut visit: F)
    where
        F: FnMut(&PreparedMotif<'a>, Scan, usize),
    {
        let forward: Vec<u8> = record
            .sequence
            .iter()
            .map(u8::to_ascii_uppercase)
            .collect();
        let reverse = reverse_complement(&forward);

        for motif in &self.motifs {
            for scan in Scan::ALL {
                let text = if scan.searches_reverse() {
                    &reverse
                } else {
                    &forward
                };
                let pattern = if scan.uses_revcomp() {
                    motif.revcomp.as_slice()
                } else {
                    motif.unitig.as_bytes()
                };

                for pos in find_occurrences(text, pattern) {
                    visit(motif, scan, pos);
                }
            }
        }
    }

    /// Apply `search` to every record and concatenate the results in record order
    fn per_record<T, F>(&self, records: &[ReferenceRecord], search: F) -> Vec<T>
    where
        T: Send,
        F: Fn(&ReferenceRecord) -> Vec<T> + Sync,
    {
        debug!(
            "Searching {} records for {} unitigs",
            records.len(),
            self.motifs.len()
        );

        if self.config.parallel {
            records
                .par_iter()
                .map(&search)
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            records.iter().flat_map(search).collect()
        }
    }
}

/// Number of raw hits for one (component, unitig, reference) combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HitCount {
    pub pc: usize,
    pub unitig: String,
    pub reference: String,
    pub count: usize,
}

/// Count raw hits per (component, unitig, reference), in first-seen order
pub fn summarize(hits: &[Hit]) -> Vec<HitCount> {
    let mut counts: Vec<HitCount> = Vec::new();
    let mut index: HashMap<&Hit, usize> = HashMap::new();

    for hit in hits {
        if let Some(&i) = index.get(hit) {
            counts[i].count += 1;
        } else {
            index.insert(hit, counts.len());
            counts.push(HitCount {
                pc: hit.pc,
                unitig: hit.unitig.clone(),
                reference: hit.reference.clone(),
                count: 1,
            });
        }
    }

    counts
}
