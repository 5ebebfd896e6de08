//! # Account Module
//!
//! Định nghĩa Account và các withdraw policy. Mỗi Account thuộc về đúng
//! một Customer (immutable sau khi tạo) và sở hữu History của riêng nó.

use crate::error::{CoreError, CoreResult};
use crate::history::History;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mã chi nhánh cố định cho mọi account
pub const BRANCH_CODE: &str = "0001";

/// Cấu hình cho checking account mới.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckingConfig {
    /// Hạn mức thấu chi - balance được phép âm tới `-overdraft_limit`
    pub overdraft_limit: Decimal,
    /// Số lần rút tối đa trong vòng đời account (không bao giờ reset)
    pub withdrawal_cap: u32,
}

impl Default for CheckingConfig {
    fn default() -> Self {
        Self {
            // Giữ nguyên giới hạn của hệ thống gốc: thấu chi 500, 3 lần rút
            overdraft_limit: Decimal::new(500, 0),
            withdrawal_cap: 3,
        }
    }
}

/// Policy quyết định một lệnh rút tiền có được chấp nhận không.
///
/// - `Plain`: chỉ check dấu và balance, không thấu chi.
/// - `Checking`: thấu chi tới `overdraft_limit`, tối đa `withdrawal_cap`
///   lần rút trong vòng đời account.
///
/// Hệ thống xung quanh chỉ instantiate `Checking`, nhưng cả hai variant
/// đều là public contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "policy")]
pub enum WithdrawPolicy {
    Plain,
    Checking {
        overdraft_limit: Decimal,
        withdrawal_cap: u32,
        withdrawals_used: u32,
    },
}

impl WithdrawPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawPolicy::Plain => "plain",
            WithdrawPolicy::Checking { .. } => "checking",
        }
    }
}

/// Tài khoản của một customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    number: u32,
    customer_tax_id: String,
    balance: Decimal,
    policy: WithdrawPolicy,
    history: History,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Tạo plain account (không thấu chi, không giới hạn số lần rút)
    pub fn plain(number: u32, customer_tax_id: &str) -> Self {
        Self::with_policy(number, customer_tax_id, WithdrawPolicy::Plain)
    }

    /// Tạo checking account với config cho trước
    pub fn checking(number: u32, customer_tax_id: &str, config: CheckingConfig) -> Self {
        Self::with_policy(
            number,
            customer_tax_id,
            WithdrawPolicy::Checking {
                overdraft_limit: config.overdraft_limit,
                withdrawal_cap: config.withdrawal_cap,
                withdrawals_used: 0,
            },
        )
    }

    fn with_policy(number: u32, customer_tax_id: &str, policy: WithdrawPolicy) -> Self {
        Self {
            number,
            customer_tax_id: customer_tax_id.to_string(),
            balance: Decimal::ZERO,
            policy,
            history: History::new(),
            created_at: Utc::now(),
        }
    }

    // === Accessors (read-only cho callers) ===

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH_CODE
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn customer_tax_id(&self) -> &str {
        &self.customer_tax_id
    }

    pub fn policy(&self) -> &WithdrawPolicy {
        &self.policy
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Số lần rút đã dùng (0 cho plain account)
    pub fn withdrawals_used(&self) -> u32 {
        match self.policy {
            WithdrawPolicy::Plain => 0,
            WithdrawPolicy::Checking {
                withdrawals_used, ..
            } => withdrawals_used,
        }
    }

    /// Hạn mức thấu chi (0 cho plain account)
    pub fn overdraft_limit(&self) -> Decimal {
        match self.policy {
            WithdrawPolicy::Plain => Decimal::ZERO,
            WithdrawPolicy::Checking {
                overdraft_limit, ..
            } => overdraft_limit,
        }
    }

    /// Chỉ Transaction::apply được ghi history, sau khi mutation thành công
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    // === Operations ===

    /// Nạp tiền.
    ///
    /// Thất bại với `InvalidAmount` nếu `amount <= 0` - không mutation,
    /// không history entry. Ghi history là trách nhiệm của caller
    /// (Transaction) sau khi thành công.
    pub fn deposit(&mut self, amount: Decimal) -> CoreResult<()> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(amount));
        }
        self.balance += amount;
        Ok(())
    }

    /// Rút tiền theo policy của account.
    ///
    /// Thứ tự check cho checking account: cap trước, rồi dấu của amount,
    /// rồi hạn mức. Thành công thì trừ balance và tăng counter.
    pub fn withdraw(&mut self, amount: Decimal) -> CoreResult<()> {
        match &mut self.policy {
            WithdrawPolicy::Plain => {
                if amount <= Decimal::ZERO {
                    return Err(CoreError::InvalidAmount(amount));
                }
                if amount > self.balance {
                    return Err(CoreError::InsufficientFunds {
                        requested: amount,
                        available: self.balance,
                    });
                }
                self.balance -= amount;
                Ok(())
            }
            WithdrawPolicy::Checking {
                overdraft_limit,
                withdrawal_cap,
                withdrawals_used,
            } => {
                if *withdrawals_used >= *withdrawal_cap {
                    return Err(CoreError::WithdrawalLimitExceeded {
                        cap: *withdrawal_cap,
                    });
                }
                if amount <= Decimal::ZERO {
                    return Err(CoreError::InvalidAmount(amount));
                }
                let available = self.balance + *overdraft_limit;
                if amount > available {
                    return Err(CoreError::InsufficientFunds {
                        requested: amount,
                        available,
                    });
                }
                self.balance -= amount;
                *withdrawals_used += 1;
                Ok(())
            }
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} (branch {}, owner {}, {})",
            self.number,
            self.branch(),
            self.customer_tax_id,
            self.policy.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn checking() -> Account {
        Account::checking(1, "12345678900", CheckingConfig::default())
    }

    #[test]
    fn test_new_account() {
        let account = checking();
        assert_eq!(account.number(), 1);
        assert_eq!(account.branch(), "0001");
        assert_eq!(account.balance(), dec!(0));
        assert_eq!(account.customer_tax_id(), "12345678900");
        assert_eq!(account.withdrawals_used(), 0);
        assert_eq!(account.overdraft_limit(), dec!(500));
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_deposit() {
        let mut account = checking();
        account.deposit(dec!(100)).unwrap();
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = checking();
        assert!(matches!(
            account.deposit(dec!(0)),
            Err(CoreError::InvalidAmount(_))
        ));
        assert!(matches!(
            account.deposit(dec!(-10)),
            Err(CoreError::InvalidAmount(_))
        ));
        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn test_withdraw_into_overdraft() {
        // Scenario: balance 100, limit 500, rút 550 -> balance -450
        let mut account = checking();
        account.deposit(dec!(100)).unwrap();

        account.withdraw(dec!(550)).unwrap();

        assert_eq!(account.balance(), dec!(-450));
        assert_eq!(account.withdrawals_used(), 1);
    }

    #[test]
    fn test_withdraw_beyond_overdraft_fails() {
        // Scenario: balance -450, limit 500 -> available 50, rút 100 fail
        let mut account = checking();
        account.deposit(dec!(100)).unwrap();
        account.withdraw(dec!(550)).unwrap();

        let err = account.withdraw(dec!(100)).unwrap_err();

        assert!(matches!(err, CoreError::InsufficientFunds { .. }));
        assert_eq!(account.balance(), dec!(-450));
        assert_eq!(account.withdrawals_used(), 1);
    }

    #[test]
    fn test_withdraw_zero_fails() {
        let mut account = checking();
        account.deposit(dec!(100)).unwrap();

        let err = account.withdraw(dec!(0)).unwrap_err();

        assert!(matches!(err, CoreError::InvalidAmount(_)));
        assert_eq!(account.balance(), dec!(100));
        assert_eq!(account.withdrawals_used(), 0);
    }

    #[test]
    fn test_withdrawal_cap_is_lifetime() {
        let mut account = checking();
        account.deposit(dec!(1000)).unwrap();

        account.withdraw(dec!(10)).unwrap();
        account.withdraw(dec!(10)).unwrap();
        account.withdraw(dec!(10)).unwrap();

        // Lần thứ tư fail dù amount hợp lệ và đủ tiền
        let err = account.withdraw(dec!(10)).unwrap_err();
        assert!(matches!(err, CoreError::WithdrawalLimitExceeded { cap: 3 }));
        assert_eq!(account.balance(), dec!(970));

        // Cap có precedence trước mọi check khác
        let err = account.withdraw(dec!(-1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::WithdrawalLimitExceeded { .. }
        ));
    }

    #[test]
    fn test_balance_never_below_negative_limit() {
        let mut account = checking();
        account.deposit(dec!(100)).unwrap();

        let _ = account.withdraw(dec!(550));
        let _ = account.withdraw(dec!(60));
        let _ = account.withdraw(dec!(50));
        let _ = account.withdraw(dec!(1));

        assert!(account.balance() >= -account.overdraft_limit());
    }

    #[test]
    fn test_plain_account_no_overdraft() {
        let mut account = Account::plain(2, "12345678900");
        account.deposit(dec!(100)).unwrap();

        let err = account.withdraw(dec!(150)).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientFunds { .. }));

        account.withdraw(dec!(100)).unwrap();
        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn test_plain_account_no_withdrawal_cap() {
        let mut account = Account::plain(2, "12345678900");
        account.deposit(dec!(100)).unwrap();

        for _ in 0..10 {
            account.withdraw(dec!(5)).unwrap();
        }
        assert_eq!(account.balance(), dec!(50));
        assert_eq!(account.withdrawals_used(), 0);
    }

    #[test]
    fn test_custom_checking_config() {
        let config = CheckingConfig {
            overdraft_limit: dec!(100),
            withdrawal_cap: 1,
        };
        let mut account = Account::checking(1, "12345678900", config);

        account.withdraw(dec!(100)).unwrap();
        assert_eq!(account.balance(), dec!(-100));

        let err = account.withdraw(dec!(1)).unwrap_err();
        assert!(matches!(err, CoreError::WithdrawalLimitExceeded { cap: 1 }));
    }
}
