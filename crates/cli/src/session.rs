//! Interactive session - the blocking menu loop
//!
//! One request per iteration: resolve the command, run it, report the
//! outcome, loop. Domain errors are printed and never end the session;
//! only `[q]` quits.

use anyhow::Result;
use minibank_business::Registry;
use minibank_core::CheckingConfig;

use crate::commands::{account, customer, teller};
use crate::prompt;

const MENU: &str = "
================ MENU ================
[d]   Deposit
[s]   Withdraw
[e]   Statement
[ej]  Statement (JSON)
[nc]  New account
[lc]  List accounts
[nu]  New customer
[q]   Quit
=> ";

/// One interactive session over an in-memory registry.
pub struct Session {
    registry: Registry,
    config: CheckingConfig,
}

impl Session {
    pub fn new(config: CheckingConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }

    /// Run the menu loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let option = prompt::read_line(MENU)?;

            match option.as_str() {
                "d" => teller::deposit(&mut self.registry)?,
                "s" => teller::withdraw(&mut self.registry)?,
                "e" => teller::statement(&mut self.registry, false)?,
                "ej" => teller::statement(&mut self.registry, true)?,
                "nc" => account::create(&mut self.registry, self.config)?,
                "lc" => account::list(&self.registry),
                "nu" => customer::create(&mut self.registry)?,
                "q" => {
                    println!("Leaving the system...");
                    return Ok(());
                }
                _ => println!("Invalid option, try again!"),
            }
        }
    }
}
