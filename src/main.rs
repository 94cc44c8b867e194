use std::process::ExitCode;

use account_ledger::{
    app,
    common::{config::Config, logging},
};
use clap::Parser;

fn main() -> ExitCode {
    let config = Config::parse();
    logging::init(&config.log_level);

    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "session aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
