use std::io::{self, Write};

use chrono::Local;

use crate::{
    common::{error::LedgerError, outcome::Outcome},
    domain::transaction::Transaction,
};

/// ctime-style local timestamp, e.g. `Thu Oct 15 02:44:00 2026`.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Prints the user-facing message for a processed command. Rejections are
/// printed as their error message; they are not I/O failures.
pub fn write_outcome<W: Write>(out: &mut W, result: &Result<Outcome, LedgerError>) -> io::Result<()> {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => return writeln!(out, "{e}"),
    };

    match outcome {
        Outcome::AccountCreated { .. } => writeln!(out, "Account created successfully."),
        Outcome::Deposited { .. } => writeln!(out, "Deposited successfully."),
        Outcome::Withdrawn { .. } => writeln!(out, "Withdrawal successful."),
        Outcome::Balance { balance, .. } => writeln!(out, "Balance: {balance}"),
        Outcome::History { number, entries } => {
            writeln!(out, "Transaction History for Account {number}:")?;
            for entry in entries {
                write_transaction(out, entry)?;
            }
            Ok(())
        }
        Outcome::Accounts(rows) => {
            writeln!(out, "All Accounts (sorted by Account Number):")?;
            for row in rows {
                writeln!(
                    out,
                    "Account Number: {}, Account Holder: {}, Balance: {}",
                    row.number, row.holder, row.balance
                )?;
            }
            Ok(())
        }
        Outcome::Exit => writeln!(out, "Exiting..."),
    }
}

fn write_transaction<W: Write>(out: &mut W, entry: &Transaction) -> io::Result<()> {
    let when = entry.timestamp.with_timezone(&Local).format(TIMESTAMP_FORMAT);
    writeln!(out, "{}: {} on {}", entry.kind.as_str(), entry.amount, when)
}
