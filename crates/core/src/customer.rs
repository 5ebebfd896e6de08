//! # Customer Module
//!
//! Định nghĩa Customer và CustomerKind. Base Customer chỉ giữ địa chỉ và
//! danh sách account sở hữu; kind `Individual` bổ sung các trường định
//! danh (tên, ngày sinh, tax id / CPF).

use crate::account::Account;
use crate::error::CoreResult;
use crate::transaction::Transaction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind của customer - closed sum, match exhaustively.
///
/// Hiện chỉ có `Individual`; mỗi variant mang đúng các trường nó cần.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum CustomerKind {
    Individual {
        /// Tên đầy đủ
        name: String,
        /// Ngày sinh (free text dd-mm-aaaa, không validate format)
        birth_date: String,
        /// CPF - identifier duy nhất trong Registry
        tax_id: String,
    },
}

/// Một customer của ngân hàng.
///
/// Customer sở hữu một danh sách account number theo thứ tự tạo; account
/// objects nằm trong Registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Địa chỉ (free text)
    address: String,
    /// Account numbers theo thứ tự tạo
    accounts: Vec<u32>,
    kind: CustomerKind,
    created_at: DateTime<Utc>,
}

impl Customer {
    /// Tạo individual customer
    pub fn individual(tax_id: &str, name: &str, birth_date: &str, address: &str) -> Self {
        Self {
            address: address.to_string(),
            accounts: Vec::new(),
            kind: CustomerKind::Individual {
                name: name.to_string(),
                birth_date: birth_date.to_string(),
                tax_id: tax_id.to_string(),
            },
            created_at: Utc::now(),
        }
    }

    // === Accessors ===

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn kind(&self) -> &CustomerKind {
        &self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Identifier duy nhất của customer (CPF)
    pub fn tax_id(&self) -> &str {
        match &self.kind {
            CustomerKind::Individual { tax_id, .. } => tax_id,
        }
    }

    /// Tên đầy đủ
    pub fn name(&self) -> &str {
        match &self.kind {
            CustomerKind::Individual { name, .. } => name,
        }
    }

    /// Ngày sinh
    pub fn birth_date(&self) -> &str {
        match &self.kind {
            CustomerKind::Individual { birth_date, .. } => birth_date,
        }
    }

    /// Account numbers sở hữu, thứ tự tạo
    pub fn accounts(&self) -> &[u32] {
        &self.accounts
    }

    /// Account đầu tiên (target mặc định cho mọi giao dịch)
    pub fn first_account(&self) -> Option<u32> {
        self.accounts.first().copied()
    }

    // === Operations ===

    /// Link một account mới vào customer
    pub fn add_account(&mut self, number: u32) {
        self.accounts.push(number);
    }

    /// Route một transaction tới account.
    ///
    /// Hiện là pure pass-through tới `transaction.apply`; indirection này
    /// là seam để sau này thêm authorization/logging per-customer mà không
    /// đổi Account/Transaction.
    pub fn route_transaction(
        &self,
        account: &mut Account,
        transaction: &Transaction,
    ) -> CoreResult<()> {
        transaction.apply(account)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (CPF {}, {} account(s))",
            self.name(),
            self.tax_id(),
            self.accounts.len()
        )
    }
}
