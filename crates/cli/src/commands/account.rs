//! Account commands: new account, list accounts

use anyhow::Result;
use minibank_business::Registry;
use minibank_core::{CheckingConfig, BRANCH_CODE};
use minibank_reports::render_accounts;

use crate::prompt;

/// Open a new checking account for an existing customer
pub fn create(registry: &mut Registry, config: CheckingConfig) -> Result<()> {
    let tax_id = prompt::read_line("Customer tax id (CPF): ")?;

    match registry.open_account(&tax_id, config) {
        Ok(number) => println!("✅ Account {} created at branch {}!", number, BRANCH_CODE),
        Err(err) => println!("⚠️  {}", err),
    }
    Ok(())
}

/// List all accounts
pub fn list(registry: &Registry) {
    println!("{}", render_accounts(registry));
}
