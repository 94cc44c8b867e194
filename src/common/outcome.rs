use crate::{
    common::money::Money,
    domain::{
        account::{AccountNumber, AccountSummary},
        transaction::Transaction,
    },
};

/// What a successfully processed command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    AccountCreated { number: AccountNumber },
    Deposited { number: AccountNumber, balance: Money },
    Withdrawn { number: AccountNumber, balance: Money },
    Balance { number: AccountNumber, balance: Money },
    /// Entries are newest-first.
    History {
        number: AccountNumber,
        entries: Vec<Transaction>,
    },
    /// Summaries are in ascending account number order.
    Accounts(Vec<AccountSummary>),
    Exit,
}

impl Outcome {
    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit)
    }
}
