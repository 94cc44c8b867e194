use chrono::{DateTime, Utc};

use crate::common::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Withdrawal,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Deposit => "Deposit",
            TxKind::Withdrawal => "Withdrawal",
        }
    }
}

/// One recorded balance movement. Immutable once appended to a log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TxKind,
    pub amount: Money,
    pub timestamp: DateTime<Utc>,
}

/// Per-account movement history.
///
/// Entries are stored oldest-first and read back newest-first, so appending
/// stays O(1) and every call to [`TransactionLog::iter`] restarts from the
/// most recent entry.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a movement stamped with the current time. Amounts are not
    /// checked here; [`crate::domain::account::Account`] validates them.
    pub fn append(&mut self, kind: TxKind, amount: Money) -> &Transaction {
        self.entries.push(Transaction {
            kind,
            amount,
            timestamp: Utc::now(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Newest-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Transaction> + ExactSizeIterator {
        self.entries.iter().rev()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
