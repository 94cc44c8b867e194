use clap::Parser;

/// In-memory account ledger with an interactive menu.
#[derive(Parser, Debug, Clone)]
#[command(name = "account-ledger", version)]
#[command(about = "Create accounts, move funds and inspect balances in memory", long_about = None)]
pub struct Config {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
