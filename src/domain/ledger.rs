use tracing::{debug, info, warn};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{
        account::{Account, AccountNumber, AccountSummary},
        directory::AccountDirectory,
        index_tree::AccountIndexTree,
        transaction::Transaction,
    },
};

/// Owns every account. The directory and the index tree always hold the
/// same set of account numbers; account creation is the only operation that
/// touches either.
#[derive(Debug, Default)]
pub struct Ledger {
    directory: AccountDirectory,
    index: AccountIndexTree,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            directory: AccountDirectory::new(),
            index: AccountIndexTree::new(),
        }
    }

    pub fn create_account(
        &mut self,
        number: AccountNumber,
        holder: impl Into<String>,
        initial_deposit: Money,
    ) -> Result<(), LedgerError> {
        if self.directory.contains(number) {
            warn!(account = number, "duplicate account number");
            return Err(LedgerError::DuplicateAccount(number));
        }

        let account = Account::new(number, holder, initial_deposit).inspect_err(|e| {
            warn!(account = number, error = %e, "account rejected");
        })?;
        self.directory.insert(account)?;
        if !self.index.insert(number) {
            warn!(account = number, "account number already indexed");
        }

        info!(account = number, balance = %initial_deposit, "account created");
        Ok(())
    }

    /// Returns the balance after the deposit.
    pub fn deposit(&mut self, number: AccountNumber, amount: Money) -> Result<Money, LedgerError> {
        let result = self.directory.get_mut(number)?.deposit(amount);
        match &result {
            Ok(balance) => info!(account = number, amount = %amount, balance = %balance, "deposit"),
            Err(e) => warn!(account = number, amount = %amount, error = %e, "deposit rejected"),
        }
        result
    }

    /// Returns the balance after the withdrawal.
    pub fn withdraw(&mut self, number: AccountNumber, amount: Money) -> Result<Money, LedgerError> {
        let result = self.directory.get_mut(number)?.withdraw(amount);
        match &result {
            Ok(balance) => {
                info!(account = number, amount = %amount, balance = %balance, "withdrawal")
            }
            Err(e) => warn!(account = number, amount = %amount, error = %e, "withdrawal rejected"),
        }
        result
    }

    pub fn balance_of(&self, number: AccountNumber) -> Result<Money, LedgerError> {
        let balance = self.directory.get(number)?.balance();
        debug!(account = number, balance = %balance, "balance lookup");
        Ok(balance)
    }

    /// Newest-first.
    pub fn history_of(
        &self,
        number: AccountNumber,
    ) -> Result<impl ExactSizeIterator<Item = &Transaction>, LedgerError> {
        let account = self.directory.get(number)?;
        debug!(account = number, entries = account.history().len(), "history lookup");
        Ok(account.history())
    }

    /// Every account in ascending account number order.
    pub fn list_all(&self) -> impl Iterator<Item = AccountSummary> + '_ {
        self.index
            .inorder()
            .filter_map(|number| self.directory.get(number).ok())
            .map(Account::summary)
    }

    #[cfg(test)]
    pub(crate) fn account(&self, number: AccountNumber) -> Result<&Account, LedgerError> {
        self.directory.get(number)
    }

    pub fn len(&self) -> usize {
        self.directory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::domain::transaction::TxKind;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    fn listing(ledger: &Ledger) -> Vec<(AccountNumber, String, Money)> {
        ledger
            .list_all()
            .map(|s| (s.number, s.holder, s.balance))
            .collect()
    }

    #[test]
    fn walkthrough_of_a_typical_session() {
        let mut ledger = Ledger::new();

        ledger.create_account(100, "Alice", money("50.0")).unwrap();
        assert_eq!(ledger.balance_of(100).unwrap(), money("50"));

        assert_eq!(ledger.deposit(100, money("25.0")).unwrap(), money("75"));
        let history: Vec<_> = ledger.history_of(100).unwrap().cloned().collect();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, TxKind::Deposit);
        assert_eq!(history[0].amount, money("25"));

        assert!(matches!(
            ledger.withdraw(100, money("1000.0")),
            Err(LedgerError::InsufficientFunds { account: 100, .. })
        ));
        assert_eq!(ledger.balance_of(100).unwrap(), money("75"));

        ledger.create_account(50, "Bob", money("10.0")).unwrap();
        ledger.create_account(200, "Cara", money("5.0")).unwrap();
        assert_eq!(
            listing(&ledger),
            vec![
                (50, "Bob".to_string(), money("10")),
                (100, "Alice".to_string(), money("75")),
                (200, "Cara".to_string(), money("5")),
            ]
        );

        assert_eq!(
            ledger.create_account(100, "Dup", Money::zero()),
            Err(LedgerError::DuplicateAccount(100))
        );
        assert_eq!(
            ledger.balance_of(999),
            Err(LedgerError::AccountNotFound(999))
        );
    }

    #[test]
    fn duplicate_create_leaves_existing_account_untouched() {
        let mut ledger = Ledger::new();
        ledger.create_account(1, "Original", money("5")).unwrap();
        ledger.deposit(1, money("1")).unwrap();

        assert!(ledger.create_account(1, "Dup", money("99")).is_err());

        let acc = ledger.account(1).unwrap();
        assert_eq!(acc.holder(), "Original");
        assert_eq!(acc.balance(), money("6"));
        assert_eq!(acc.history().count(), 1);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list_all().count(), 1);
    }

    #[test]
    fn rejected_opening_balance_indexes_nothing() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.create_account(3, "Neg", money("-1")),
            Err(LedgerError::InvalidAmount(money("-1")))
        );
        assert!(ledger.is_empty());
        assert_eq!(ledger.list_all().count(), 0);
        assert!(ledger.create_account(3, "Retry", money("1")).is_ok());
    }

    #[test]
    fn operations_on_missing_accounts_mutate_nothing() {
        let mut ledger = Ledger::new();
        ledger.create_account(1, "Only", money("10")).unwrap();

        assert_eq!(
            ledger.deposit(2, money("5")),
            Err(LedgerError::AccountNotFound(2))
        );
        assert_eq!(
            ledger.withdraw(2, money("5")),
            Err(LedgerError::AccountNotFound(2))
        );
        assert!(matches!(
            ledger.history_of(2),
            Err(LedgerError::AccountNotFound(2))
        ));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.balance_of(1).unwrap(), money("10"));
        assert_eq!(ledger.history_of(1).unwrap().count(), 0);
    }

    #[test]
    fn history_is_newest_first_across_kinds() {
        let mut ledger = Ledger::new();
        ledger.create_account(9, "Dana", Money::zero()).unwrap();
        ledger.deposit(9, money("10")).unwrap();
        ledger.withdraw(9, money("4")).unwrap();
        ledger.deposit(9, money("2.5")).unwrap();

        let kinds: Vec<_> = ledger
            .history_of(9)
            .unwrap()
            .map(|t| (t.kind, t.amount))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (TxKind::Deposit, money("2.5")),
                (TxKind::Withdrawal, money("4")),
                (TxKind::Deposit, money("10")),
            ]
        );
        assert_eq!(ledger.balance_of(9).unwrap(), money("8.5"));
    }
}
