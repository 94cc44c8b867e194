use tracing::{debug, info};

use crate::{
    common::{command::Command, error::LedgerError, outcome::Outcome},
    domain::ledger::Ledger,
    worker::handlers::{create, deposit, inquiry, withdrawal},
};

/// Routes commands to their handlers and keeps session counters.
#[derive(Debug, Default)]
pub struct Processor {
    processed: u64,
    rejected: u64,
}

impl Processor {
    pub fn new() -> Self {
        Self {
            processed: 0,
            rejected: 0,
        }
    }

    pub fn process(&mut self, ledger: &mut Ledger, command: Command) -> Result<Outcome, LedgerError> {
        debug!(?command, "processing command");
        let result = match command {
            Command::CreateAccount {
                number,
                holder,
                initial_deposit,
            } => create::handle(ledger, number, holder, initial_deposit),
            Command::Deposit { number, amount } => deposit::handle(ledger, number, amount),
            Command::Withdraw { number, amount } => withdrawal::handle(ledger, number, amount),
            Command::Balance { number } => inquiry::balance(ledger, number),
            Command::History { number } => inquiry::history(ledger, number),
            Command::ListAll => Ok(inquiry::list_all(ledger)),
            Command::Exit => Ok(Outcome::Exit),
        };

        self.processed += 1;
        if result.is_err() {
            self.rejected += 1;
        }
        result
    }

    #[cfg(test)]
    fn processed(&self) -> u64 {
        self.processed
    }

    #[cfg(test)]
    fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn log_summary(&self, ledger: &Ledger) {
        info!(
            processed = self.processed,
            rejected = self.rejected,
            accounts = ledger.len(),
            "session finished"
        );
    }
}
