//! Minibank CLI - interactive banking menu
//!
//! Usage:
//! ```bash
//! minibank
//! minibank --overdraft-limit 1000 --withdrawal-cap 5
//! ```
//!
//! All state lives in memory for the lifetime of the session; quitting
//! discards everything.

use anyhow::Result;
use clap::Parser;
use minibank_core::CheckingConfig;
use rust_decimal::Decimal;

mod commands;
mod prompt;
mod session;

use session::Session;

/// Minibank - an in-memory banking ledger simulator
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Overdraft limit for newly opened accounts
    #[arg(long, default_value = "500")]
    pub overdraft_limit: Decimal,

    /// Lifetime withdrawal cap for newly opened accounts
    #[arg(long, default_value_t = 3)]
    pub withdrawal_cap: u32,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = CheckingConfig {
        overdraft_limit: cli.overdraft_limit,
        withdrawal_cap: cli.withdrawal_cap,
    };

    Session::new(config).run()
}
