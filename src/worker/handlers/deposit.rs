use crate::{
    common::{error::LedgerError, money::Money, outcome::Outcome},
    domain::{account::AccountNumber, ledger::Ledger},
};

pub fn handle(
    ledger: &mut Ledger,
    number: AccountNumber,
    amount: Money,
) -> Result<Outcome, LedgerError> {
    let balance = ledger.deposit(number, amount)?;
    Ok(Outcome::Deposited { number, balance })
}
