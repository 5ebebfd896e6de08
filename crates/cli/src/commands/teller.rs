//! Teller commands: deposit, withdraw, statement

use anyhow::Result;
use minibank_business::{Registry, TellerService, TransactionReceipt};
use minibank_core::format_brl;
use minibank_reports::{render_statement, render_statement_json};

use crate::prompt;

/// Deposit into the customer's first account
pub fn deposit(registry: &mut Registry) -> Result<()> {
    let tax_id = prompt::read_line("Customer tax id (CPF): ")?;
    let Some(amount) = prompt::read_amount("Deposit amount: ")? else {
        return Ok(());
    };

    let mut teller = TellerService::new(registry);
    match teller.deposit(&tax_id, amount) {
        Ok(receipt) => print_receipt("Deposit successful!", &receipt),
        Err(err) => println!("⚠️  {}", err),
    }
    Ok(())
}

/// Withdraw from the customer's first account
pub fn withdraw(registry: &mut Registry) -> Result<()> {
    let tax_id = prompt::read_line("Customer tax id (CPF): ")?;
    let Some(amount) = prompt::read_amount("Withdrawal amount: ")? else {
        return Ok(());
    };

    let mut teller = TellerService::new(registry);
    match teller.withdraw(&tax_id, amount) {
        Ok(receipt) => print_receipt("Withdrawal successful!", &receipt),
        Err(err) => println!("⚠️  {}", err),
    }
    Ok(())
}

/// Print the statement of the customer's first account
pub fn statement(registry: &mut Registry, json: bool) -> Result<()> {
    let tax_id = prompt::read_line("Customer tax id (CPF): ")?;

    let teller = TellerService::new(registry);
    match teller.statement(&tax_id) {
        Ok(view) if json => println!("{}", render_statement_json(&view)?),
        Ok(view) => println!("{}", render_statement(&view)),
        Err(err) => println!("⚠️  {}", err),
    }
    Ok(())
}

fn print_receipt(headline: &str, receipt: &TransactionReceipt) {
    println!("✅ {}", headline);
    println!("   Account: {}", receipt.account_number);
    println!("   Amount:  {}", format_brl(receipt.amount));
    println!("   Balance: {}", format_brl(receipt.balance_after));
}
