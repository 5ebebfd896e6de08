//! # Minibank Business
//!
//! Business logic layer - Registry (in-memory customers + accounts) and
//! TellerService (deposit, withdraw, statement operations).

pub mod registry;
pub mod teller;

pub use registry::Registry;
pub use teller::{StatementView, TellerService, TransactionReceipt};
