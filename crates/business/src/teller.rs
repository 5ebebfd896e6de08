//! Teller operations - deposit, withdraw, statement
//!
//! TellerService is the operation layer the interactive menu talks to. It
//! resolves the customer by tax id, targets their first account, builds
//! the Transaction and routes it through the Customer. Every operation is
//! atomic: full success with exactly one history entry, or full failure
//! with none.

use chrono::{DateTime, Utc};
use minibank_core::{CoreResult, Customer, HistoryEntry, Transaction, TransactionKind};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::registry::Registry;

/// Result of a successful deposit or withdrawal
#[derive(Debug, Clone, Serialize)]
pub struct TransactionReceipt {
    pub account_number: u32,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub balance_after: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// Snapshot of an account's history plus current balance, for rendering
#[derive(Debug, Clone, Serialize)]
pub struct StatementView {
    pub account_number: u32,
    pub branch: String,
    pub owner_name: String,
    pub entries: Vec<HistoryEntry>,
    pub balance: Decimal,
}

/// Teller service - handles deposit, withdraw, statement operations
pub struct TellerService<'a> {
    registry: &'a mut Registry,
}

impl<'a> TellerService<'a> {
    pub fn new(registry: &'a mut Registry) -> Self {
        Self { registry }
    }

    /// Deposit into the customer's first account
    pub fn deposit(&mut self, tax_id: &str, amount: Decimal) -> CoreResult<TransactionReceipt> {
        self.execute(tax_id, Transaction::deposit(amount))
    }

    /// Withdraw from the customer's first account
    pub fn withdraw(&mut self, tax_id: &str, amount: Decimal) -> CoreResult<TransactionReceipt> {
        self.execute(tax_id, Transaction::withdrawal(amount))
    }

    fn execute(&mut self, tax_id: &str, transaction: Transaction) -> CoreResult<TransactionReceipt> {
        let (customer, account) = self.registry.customer_first_account_mut(tax_id)?;

        match customer.route_transaction(account, &transaction) {
            Ok(()) => {
                let timestamp = account
                    .history()
                    .entries()
                    .last()
                    .map(|e| e.timestamp)
                    .unwrap_or_else(Utc::now);
                tracing::info!(
                    tax_id,
                    account = account.number(),
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    balance = %account.balance(),
                    "transaction applied"
                );
                Ok(TransactionReceipt {
                    account_number: account.number(),
                    kind: transaction.kind(),
                    amount: transaction.amount(),
                    balance_after: account.balance(),
                    timestamp,
                })
            }
            Err(err) => {
                tracing::warn!(
                    tax_id,
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    %err,
                    "transaction rejected"
                );
                Err(err)
            }
        }
    }

    /// Statement for the customer's first account
    pub fn statement(&self, tax_id: &str) -> CoreResult<StatementView> {
        let account = self.registry.first_account_of(tax_id)?;
        let owner_name = self
            .registry
            .find_customer(tax_id)
            .map(Customer::name)
            .unwrap_or_default()
            .to_string();

        Ok(StatementView {
            account_number: account.number(),
            branch: account.branch().to_string(),
            owner_name,
            entries: account.history().entries().to_vec(),
            balance: account.balance(),
        })
    }
}
