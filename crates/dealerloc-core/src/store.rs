//! Deduplicated dealer store with fetch-coverage tracking.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::bbox::BoundingBox;
use crate::dealer::DealerRecord;

/// Page-lifetime store of every dealer seen so far.
///
/// Records are keyed by `id` and never evicted; the store only grows as the
/// user pans or searches. Coverage is tracked as the merged envelope of all
/// queried boxes rather than their exact union — a box inside the envelope
/// counts as covered even when the truly fetched region is non-convex. That
/// approximation trades a few skipped fetches for a single-rectangle
/// containment test.
#[derive(Debug, Default)]
pub struct LocationStore {
    records: HashMap<String, DealerRecord>,
    /// Ids in first-insertion order, so snapshots are deterministic.
    order: Vec<String>,
    covered: Option<BoundingBox>,
    total_count: u64,
}

/// Per-call tally of what a [`LocationStore::merge`] did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Records not previously known, now inserted.
    pub inserted: usize,
    /// Records whose id was already present; their existing fields were kept.
    pub duplicate: usize,
    /// Records dropped for non-finite or out-of-range coordinates.
    pub rejected: usize,
}

impl LocationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the covered envelope exists and fully contains `bbox`.
    #[must_use]
    pub fn is_covered(&self, bbox: &BoundingBox) -> bool {
        self.covered.as_ref().is_some_and(|c| c.contains(bbox))
    }

    /// Merges a completed fetch into the store.
    ///
    /// First-seen wins: an incoming record whose id is already present never
    /// overwrites the known record's fields. Records with invalid
    /// coordinates are rejected individually; valid siblings in the same
    /// batch still merge. The covered envelope absorbs `new_box` and
    /// `total_count` takes the fetch's authoritative `reported_total`.
    ///
    /// Merging is commutative and idempotent per fetch, so out-of-order
    /// completion of overlapping in-flight fetches converges to the same
    /// state.
    pub fn merge(
        &mut self,
        records: impl IntoIterator<Item = DealerRecord>,
        new_box: BoundingBox,
        reported_total: u64,
    ) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();
        for record in records {
            if record.validate_coordinates().is_err() {
                outcome.rejected += 1;
                continue;
            }
            match self.records.entry(record.id.clone()) {
                Entry::Occupied(_) => outcome.duplicate += 1,
                Entry::Vacant(slot) => {
                    self.order.push(record.id.clone());
                    slot.insert(record);
                    outcome.inserted += 1;
                }
            }
        }
        self.covered = Some(match self.covered {
            Some(covered) => covered.merge(&new_box),
            None => new_box,
        });
        self.total_count = reported_total;
        outcome
    }

    /// Snapshot of everything known so far, in first-seen order.
    #[must_use]
    pub fn all_records(&self) -> Vec<DealerRecord> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DealerRecord> {
        self.records.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Authoritative total dealer count reported by the most recent fetch.
    /// May exceed [`Self::len`] when only a geographic subset has been
    /// fetched.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    #[must_use]
    pub fn covered(&self) -> Option<BoundingBox> {
        self.covered
    }
}
