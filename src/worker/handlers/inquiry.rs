//! Read-only commands: balance, history and the sorted listing.

use crate::{
    common::{error::LedgerError, outcome::Outcome},
    domain::{account::AccountNumber, ledger::Ledger},
};

pub fn balance(ledger: &Ledger, number: AccountNumber) -> Result<Outcome, LedgerError> {
    let balance = ledger.balance_of(number)?;
    Ok(Outcome::Balance { number, balance })
}

pub fn history(ledger: &Ledger, number: AccountNumber) -> Result<Outcome, LedgerError> {
    let entries = ledger.history_of(number)?.cloned().collect();
    Ok(Outcome::History { number, entries })
}

pub fn list_all(ledger: &Ledger) -> Outcome {
    Outcome::Accounts(ledger.list_all().collect())
}
