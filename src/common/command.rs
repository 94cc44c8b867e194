use crate::{common::money::Money, domain::account::AccountNumber};

/// A single user request, produced by the interactive prompt and handed to
/// the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateAccount {
        number: AccountNumber,
        holder: String,
        initial_deposit: Money,
    },
    Deposit { number: AccountNumber, amount: Money },
    Withdraw { number: AccountNumber, amount: Money },
    Balance { number: AccountNumber },
    History { number: AccountNumber },
    ListAll,
    Exit,
}
