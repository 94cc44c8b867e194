use crate::{
    common::{error::LedgerError, money::Money, outcome::Outcome},
    domain::{account::AccountNumber, ledger::Ledger},
};

pub fn handle(
    ledger: &mut Ledger,
    number: AccountNumber,
    holder: String,
    initial_deposit: Money,
) -> Result<Outcome, LedgerError> {
    ledger.create_account(number, holder, initial_deposit)?;
    Ok(Outcome::AccountCreated { number })
}
