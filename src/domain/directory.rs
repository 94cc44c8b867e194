use std::collections::{HashMap, hash_map::Entry};

use crate::{
    common::error::LedgerError,
    domain::account::{Account, AccountNumber},
};

/// Hash index from account number to account. Sole owner of every
/// [`Account`]; entries are never removed.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: HashMap<AccountNumber, Account>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn contains(&self, number: AccountNumber) -> bool {
        self.accounts.contains_key(&number)
    }

    pub fn insert(&mut self, account: Account) -> Result<(), LedgerError> {
        match self.accounts.entry(account.number()) {
            Entry::Occupied(existing) => Err(LedgerError::DuplicateAccount(*existing.key())),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    pub fn get(&self, number: AccountNumber) -> Result<&Account, LedgerError> {
        self.accounts
            .get(&number)
            .ok_or(LedgerError::AccountNotFound(number))
    }

    pub fn get_mut(&mut self, number: AccountNumber) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(&number)
            .ok_or(LedgerError::AccountNotFound(number))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
