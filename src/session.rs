//! Session store — owns the records for one operator session.
//!
//! The store is created by the embedding surface, filled by one batch run,
//! re-read across render cycles, and dropped with the session. Nothing is
//! persisted and nothing is shared between sessions, so there is no locking:
//! the single active thread of control is the only mutator.

use std::cmp::Reverse;

use crate::models::ScreeningRecord;

/// Ordered collection of screening records for one session.
#[derive(Debug, Default)]
pub struct ScreeningSession {
    records: Vec<ScreeningRecord>,
}

impl ScreeningSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record in submission order.
    pub fn push(&mut self, record: ScreeningRecord) {
        self.records.push(record);
    }

    /// Ranks the batch: descending score, ties keep submission order.
    /// `sort_by_key` is stable, which is what makes the tiebreak hold.
    pub fn rank(&mut self) {
        self.records.sort_by_key(|record| Reverse(record.score));
    }

    pub fn records(&self) -> &[ScreeningRecord] {
        &self.records
    }

    pub fn record_mut(&mut self, index: usize) -> Option<&mut ScreeningRecord> {
        self.records.get_mut(index)
    }

    /// Flags one record as notified, leaving every other record and the
    /// ranking untouched. Returns false when the index is out of range.
    pub fn mark_notified(&mut self, index: usize) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.mark_notified();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
