//! # Minibank Core
//!
//! Core domain types - Account, Transaction, History, Customer, errors.
//!
//! Tất cả state nằm trong bộ nhớ, không có persistence. Mọi số tiền dùng
//! `rust_decimal::Decimal` để tránh lỗi làm tròn của floating point.

pub mod account;
pub mod customer;
pub mod error;
pub mod history;
pub mod money;
pub mod transaction;

// Re-export main types
pub use account::{Account, CheckingConfig, WithdrawPolicy, BRANCH_CODE};
pub use customer::{Customer, CustomerKind};
pub use error::{CoreError, CoreResult};
pub use history::{History, HistoryEntry};
pub use money::{format_brl, round_centavos};
pub use transaction::{Transaction, TransactionKind};
