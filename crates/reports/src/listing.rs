//! Account listing rendering
//!
//! One block per account: branch, number, holder name. Holder names are
//! resolved through the registry; an account whose owner is missing from
//! the registry should not happen, but renders with the raw tax id.

use minibank_business::Registry;
use minibank_core::Customer;

const SEPARATOR: &str = "==================================================";

/// Render all accounts in creation order.
pub fn render_accounts(registry: &Registry) -> String {
    if registry.accounts().is_empty() {
        return "No accounts opened yet.".to_string();
    }

    let mut out = String::new();
    for account in registry.accounts() {
        let holder = registry
            .find_customer(account.customer_tax_id())
            .map(Customer::name)
            .unwrap_or(account.customer_tax_id());

        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format!("Branch:  {}\n", account.branch()));
        out.push_str(&format!("Account: {}\n", account.number()));
        out.push_str(&format!("Holder:  {}\n", holder));
    }
    out.push_str(SEPARATOR);
    out
}
