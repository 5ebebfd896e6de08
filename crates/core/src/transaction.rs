//! # Transaction Module
//!
//! Định nghĩa Transaction (Deposit / Withdrawal) - immutable value được
//! construct tạm thời, apply một lần lên Account rồi chỉ còn tồn tại
//! dưới dạng HistoryEntry.

use crate::account::Account;
use crate::error::CoreResult;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Loại giao dịch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Nạp tiền vào account
    Deposit,
    /// Rút tiền khỏi account
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }

    /// Parse từ string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(TransactionKind::Deposit),
            "withdrawal" => Some(TransactionKind::Withdrawal),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Một giao dịch chưa áp dụng.
///
/// Amount là immutable sau khi construct. `apply` là nơi duy nhất ghi
/// vào History: giao dịch thất bại không để lại dấu vết nào, không có
/// partial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
}

impl Transaction {
    /// Tạo giao dịch nạp tiền
    pub fn deposit(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
        }
    }

    /// Tạo giao dịch rút tiền
    pub fn withdrawal(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Withdrawal,
            amount,
        }
    }

    /// Số tiền của giao dịch
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Loại giao dịch
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Áp dụng giao dịch lên account.
    ///
    /// Nếu account mutation thành công thì ghi một entry vào History của
    /// account đó; nếu thất bại thì không ghi gì cả.
    pub fn apply(&self, account: &mut Account) -> CoreResult<()> {
        match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount)?,
            TransactionKind::Withdrawal => account.withdraw(self.amount)?,
        }
        account.history_mut().record(self.kind, self.amount);
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.kind, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{Account, CheckingConfig};
    use crate::error::CoreError;
    use rust_decimal_macros::dec;

    fn checking() -> Account {
        Account::checking(1, "12345678900", CheckingConfig::default())
    }

    #[test]
    fn test_kind_str() {
        assert_eq!(TransactionKind::Deposit.as_str(), "deposit");
        assert_eq!(
            TransactionKind::from_str("WITHDRAWAL"),
            Some(TransactionKind::Withdrawal)
        );
        assert_eq!(TransactionKind::from_str("transfer"), None);
    }

    #[test]
    fn test_apply_deposit_records_history() {
        let mut account = checking();
        let tx = Transaction::deposit(dec!(100));

        tx.apply(&mut account).unwrap();

        assert_eq!(account.balance(), dec!(100));
        assert_eq!(account.history().len(), 1);
        assert_eq!(account.history().entries()[0].amount, dec!(100));
        assert_eq!(
            account.history().entries()[0].kind,
            TransactionKind::Deposit
        );
    }

    #[test]
    fn test_failed_apply_leaves_no_trace() {
        let mut account = checking();
        let tx = Transaction::deposit(dec!(-10));

        let err = tx.apply(&mut account).unwrap_err();

        assert!(matches!(err, CoreError::InvalidAmount(_)));
        assert_eq!(account.balance(), dec!(0));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_apply_withdrawal_records_history() {
        let mut account = checking();
        Transaction::deposit(dec!(200)).apply(&mut account).unwrap();
        Transaction::withdrawal(dec!(50))
            .apply(&mut account)
            .unwrap();

        assert_eq!(account.balance(), dec!(150));
        assert_eq!(account.history().len(), 2);
        assert_eq!(
            account.history().entries()[1].kind,
            TransactionKind::Withdrawal
        );
    }
}
