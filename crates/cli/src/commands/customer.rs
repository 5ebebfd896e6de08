//! Customer commands: new customer

use anyhow::Result;
use minibank_business::Registry;
use minibank_core::Customer;

use crate::prompt;

/// Register a new individual customer
pub fn create(registry: &mut Registry) -> Result<()> {
    let tax_id = prompt::read_line("Tax id (CPF, numbers only): ")?;
    if registry.find_customer(&tax_id).is_some() {
        println!("⚠️  Customer already exists: {}", tax_id);
        return Ok(());
    }

    let name = prompt::read_line("Full name: ")?;
    let birth_date = prompt::read_line("Birth date (dd-mm-yyyy): ")?;
    let address = prompt::read_line("Address (street, nr - district - city/state): ")?;

    match registry.register_customer(Customer::individual(&tax_id, &name, &birth_date, &address)) {
        Ok(()) => println!("✅ Customer created!"),
        Err(err) => println!("⚠️  {}", err),
    }
    Ok(())
}
