//! # History Module
//!
//! Append-only log các giao dịch đã áp dụng thành công của một Account.
//! Entries không bao giờ bị sửa hay sắp xếp lại sau khi ghi.

use crate::transaction::TransactionKind;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Một dòng trong lịch sử giao dịch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Loại giao dịch
    pub kind: TransactionKind,
    /// Số tiền
    pub amount: Decimal,
    /// Thời điểm ghi
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {:.2}",
            self.timestamp.format("%d-%m-%Y %H:%M:%S"),
            self.kind,
            self.amount
        )
    }
}

/// Lịch sử giao dịch của một Account.
///
/// Trusted caller: chỉ được ghi sau khi Account mutation đã thành công
/// (xem `Transaction::apply`), nên `record` không validate gì cả.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Tạo History rỗng
    pub fn new() -> Self {
        Self::default()
    }

    /// Ghi một giao dịch đã thành công vào cuối log
    pub fn record(&mut self, kind: TransactionKind, amount: Decimal) {
        self.entries.push(HistoryEntry {
            kind,
            amount,
            timestamp: Utc::now(),
        });
    }

    /// Toàn bộ entries theo thứ tự ghi
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Số giao dịch đã ghi
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Kiểm tra log có rỗng không
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_history_starts_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_history_preserves_order() {
        let mut history = History::new();
        history.record(TransactionKind::Deposit, dec!(100));
        history.record(TransactionKind::Withdrawal, dec!(30));
        history.record(TransactionKind::Deposit, dec!(5));

        assert_eq!(history.len(), 3);
        let kinds: Vec<_> = history.entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Deposit,
                TransactionKind::Withdrawal,
                TransactionKind::Deposit,
            ]
        );
        assert_eq!(history.entries()[1].amount, dec!(30));
    }

    #[test]
    fn test_entry_display() {
        let mut history = History::new();
        history.record(TransactionKind::Deposit, dec!(100.5));
        let line = history.entries()[0].to_string();
        assert!(line.contains("deposit"));
        assert!(line.contains("100.50"));
    }
}
