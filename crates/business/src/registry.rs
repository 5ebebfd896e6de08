//! Registry - in-memory collections of customers and accounts
//!
//! The Registry replaces the source system's process-wide mutable lists
//! with an explicitly constructed object owned by the session. State is
//! initialized empty at startup and discarded at process exit; there is
//! no persistence. Lookups are linear scans.

use minibank_core::{Account, CheckingConfig, CoreError, CoreResult, Customer};

/// In-memory registry of all known customers and accounts.
#[derive(Debug)]
pub struct Registry {
    customers: Vec<Customer>,
    accounts: Vec<Account>,
    next_account_number: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
            accounts: Vec::new(),
            next_account_number: 1,
        }
    }

    // === Customers ===

    /// Register a new customer. Fails if the tax id is already taken.
    pub fn register_customer(&mut self, customer: Customer) -> CoreResult<()> {
        if self.find_customer(customer.tax_id()).is_some() {
            return Err(CoreError::DuplicateCustomer(customer.tax_id().to_string()));
        }
        tracing::info!(tax_id = customer.tax_id(), "customer registered");
        self.customers.push(customer);
        Ok(())
    }

    /// Find a customer by tax id (first match, linear scan)
    pub fn find_customer(&self, tax_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.tax_id() == tax_id)
    }

    pub fn find_customer_mut(&mut self, tax_id: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.tax_id() == tax_id)
    }

    /// All registered customers, in registration order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    // === Accounts ===

    /// Open a new checking account for an existing customer.
    ///
    /// Assigns the next monotonic account number, links the account to the
    /// customer's owned list and the global list, and returns the number.
    pub fn open_account(&mut self, tax_id: &str, config: CheckingConfig) -> CoreResult<u32> {
        let number = self.next_account_number;
        let customer = self
            .find_customer_mut(tax_id)
            .ok_or_else(|| CoreError::CustomerNotFound(tax_id.to_string()))?;

        customer.add_account(number);
        self.accounts.push(Account::checking(number, tax_id, config));
        self.next_account_number += 1;

        tracing::info!(tax_id, account = number, "account opened");
        Ok(number)
    }

    /// Find an account by number (linear scan)
    pub fn find_account(&self, number: u32) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    pub fn find_account_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number() == number)
    }

    /// All accounts, in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// First account owned by a customer (the default transaction target).
    ///
    /// `CustomerNotFound` when the tax id is unknown, `AccountNotFound`
    /// when the customer has no accounts yet.
    pub fn first_account_of(&self, tax_id: &str) -> CoreResult<&Account> {
        let customer = self
            .find_customer(tax_id)
            .ok_or_else(|| CoreError::CustomerNotFound(tax_id.to_string()))?;
        let number = customer
            .first_account()
            .ok_or_else(|| CoreError::AccountNotFound(tax_id.to_string()))?;
        self.find_account(number)
            .ok_or_else(|| CoreError::AccountNotFound(tax_id.to_string()))
    }

    /// Resolve a customer together with a mutable borrow of their first
    /// account. Field-level borrow split: customers are only read while
    /// the account is mutated.
    pub fn customer_first_account_mut(
        &mut self,
        tax_id: &str,
    ) -> CoreResult<(&Customer, &mut Account)> {
        let Self {
            customers,
            accounts,
            ..
        } = self;

        let customer = customers
            .iter()
            .find(|c| c.tax_id() == tax_id)
            .ok_or_else(|| CoreError::CustomerNotFound(tax_id.to_string()))?;
        let number = customer
            .first_account()
            .ok_or_else(|| CoreError::AccountNotFound(tax_id.to_string()))?;
        let account = accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or_else(|| CoreError::AccountNotFound(tax_id.to_string()))?;

        Ok((customer, account))
    }
}
