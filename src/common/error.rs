use crate::{common::money::Money, domain::account::AccountNumber};

/// Errors that abort a session. Ledger rejections never end up here.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rejected ledger operation. Reported to the user, never fatal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account with this number already exists.")]
    DuplicateAccount(AccountNumber),
    #[error("Account not found.")]
    AccountNotFound(AccountNumber),
    #[error("Insufficient balance.")]
    InsufficientFunds {
        account: AccountNumber,
        requested: Money,
        available: Money,
    },
    #[error("Invalid amount: {0}.")]
    InvalidAmount(Money),
    #[error("Amount overflow: balance cannot hold another {0}.")]
    AmountOverflow(Money),
}
