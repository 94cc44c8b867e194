use crate::{
    common::{error::LedgerError, money::Money, outcome::Outcome},
    domain::{account::AccountNumber, ledger::Ledger},
};

pub fn handle(
    ledger: &mut Ledger,
    number: AccountNumber,
    amount: Money,
) -> Result<Outcome, LedgerError> {
    let balance = ledger.withdraw(number, amount)?;
    Ok(Outcome::Withdrawn { number, balance })
}
