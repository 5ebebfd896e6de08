//! # Error Module
//!
//! Định nghĩa các domain errors cho Minibank sử dụng thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// Mọi lỗi đều được xử lý tại boundary của menu, không lỗi nào fatal
/// cho process.
#[derive(Debug, Error)]
pub enum CoreError {
    // === Transaction errors ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Withdrawal limit exceeded: {cap} withdrawals already used")]
    WithdrawalLimitExceeded { cap: u32 },

    // === Customer errors ===
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Customer already exists: {0}")]
    DuplicateCustomer(String),

    // === Account errors ===
    #[error("Customer {0} has no account yet")]
    AccountNotFound(String),
}

/// Result type alias với CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Kiểm tra có phải lỗi lookup (không tìm thấy) không
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::CustomerNotFound(_) | CoreError::AccountNotFound(_)
        )
    }

    /// Kiểm tra có phải lỗi bị từ chối bởi withdraw policy không
    pub fn is_rejected_withdrawal(&self) -> bool {
        matches!(
            self,
            CoreError::InsufficientFunds { .. } | CoreError::WithdrawalLimitExceeded { .. }
        )
    }
}
