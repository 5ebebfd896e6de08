//! Stdin prompting and input parsing
//!
//! Amount parsing is recoverable: an unparsable amount returns `None` and
//! the menu loop continues, it never aborts the session.

use anyhow::Result;
use minibank_core::round_centavos;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Print a label and read one trimmed line from stdin.
pub fn read_line(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for a currency amount. Returns `None` on unparsable input.
pub fn read_amount(label: &str) -> Result<Option<Decimal>> {
    let input = read_line(label)?;
    match parse_amount(&input) {
        Some(amount) => Ok(Some(amount)),
        None => {
            println!("⚠️  Not a valid amount: {:?}", input);
            Ok(None)
        }
    }
}

/// Parse a decimal amount, accepting comma as decimal separator.
/// Input is rounded to whole centavos before it reaches the ledger.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let normalized = input.trim().replace(',', ".");
    Decimal::from_str(&normalized).ok().map(round_centavos)
}
