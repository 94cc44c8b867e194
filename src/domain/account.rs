use crate::{
    common::{error::LedgerError, money::Money},
    domain::transaction::{Transaction, TransactionLog, TxKind},
};

pub type AccountNumber = u32;

#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    /// Never negative.
    balance: Money,
    log: TransactionLog,
}

/// Owned snapshot of an account for the sorted listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub number: AccountNumber,
    pub holder: String,
    pub balance: Money,
}

impl Account {
    /// The opening balance is not recorded as a transaction.
    pub fn new(
        number: AccountNumber,
        holder: impl Into<String>,
        initial_balance: Money,
    ) -> Result<Self, LedgerError> {
        if initial_balance.is_negative() {
            return Err(LedgerError::InvalidAmount(initial_balance));
        }
        Ok(Self {
            number,
            holder: holder.into(),
            balance: initial_balance,
            log: TransactionLog::new(),
        })
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn deposit(&mut self, amount: Money) -> Result<Money, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow(amount))?;
        self.log.append(TxKind::Deposit, amount);
        Ok(self.balance)
    }

    /// Fails without touching balance or history when `amount` exceeds the
    /// balance.
    pub fn withdraw(&mut self, amount: Money) -> Result<Money, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                account: self.number,
                requested: amount,
                available: self.balance,
            });
        }
        self.balance = self.balance - amount;
        self.log.append(TxKind::Withdrawal, amount);
        Ok(self.balance)
    }

    /// Newest-first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &Transaction> + ExactSizeIterator {
        self.log.iter()
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            number: self.number,
            holder: self.holder.clone(),
            balance: self.balance,
        }
    }
}
