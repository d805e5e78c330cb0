//! Per-account transaction history
//!
//! The `TransactionLog` is an append-only sequence of [`TransactionRecord`]s.
//! Insertion order is chronological order; records are never reordered, edited
//! or removed. Only the ledger can append.

use crate::types::TransactionRecord;
use std::slice::Iter;

/// Append-only, chronologically ordered history of one account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionLog {
    records: Vec<TransactionRecord>,
}

impl TransactionLog {
    /// Create an empty log
    pub fn new() -> Self {
        TransactionLog {
            records: Vec::new(),
        }
    }

    /// Append a record at the end of the log
    pub(crate) fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// All records, oldest first
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Iterate over the records, oldest first
    pub fn iter(&self) -> Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    /// Most recent record
    pub fn last(&self) -> Option<&TransactionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a TransactionLog {
    type Item = &'a TransactionRecord;
    type IntoIter = Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;

    #[test]
    fn test_new_log_is_empty() {
        let log = TransactionLog::new();

        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.last().is_none());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut log = TransactionLog::new();

        log.append(TransactionRecord::new(TransactionKind::Initial, 100, 100));
        log.append(TransactionRecord::new(TransactionKind::Deposit, 50, 150));
        log.append(TransactionRecord::new(TransactionKind::Withdraw, 30, 120));

        let kinds: Vec<_> = log.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Initial,
                TransactionKind::Deposit,
                TransactionKind::Withdraw
            ]
        );
        assert_eq!(log.len(), 3);
        assert_eq!(log.last().map(|r| r.balance_after), Some(120));
    }

    #[test]
    fn test_snapshots_are_not_recomputed() {
        let mut log = TransactionLog::new();

        // Snapshots are stored as given, even when they do not chain arithmetically
        log.append(TransactionRecord::new(TransactionKind::Initial, 100, 100));
        log.append(TransactionRecord::new(TransactionKind::Deposit, 50, 999));

        let balances: Vec<_> = (&log).into_iter().map(|r| r.balance_after).collect();
        assert_eq!(balances, vec![100, 999]);
    }
}
