//! # Money Module
//!
//! Helpers cho số tiền BRL với rust_decimal để đảm bảo độ chính xác.
//! Hệ thống chỉ dùng một loại tiền tệ (Real - R$, 2 decimals).

use rust_decimal::Decimal;

/// Ký hiệu tiền tệ hiển thị
pub const CURRENCY_SYMBOL: &str = "R$";

/// Số chữ số thập phân của BRL
pub const CURRENCY_DECIMALS: u32 = 2;

/// Format một số tiền thành chuỗi hiển thị, ví dụ `R$ 1234.56`.
///
/// # Examples
/// ```
/// use minibank_core::format_brl;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_brl(Decimal::new(10050, 2)), "R$ 100.50");
/// ```
pub fn format_brl(amount: Decimal) -> String {
    format!("{} {:.2}", CURRENCY_SYMBOL, amount)
}

/// Làm tròn về 2 decimals (centavos)
pub fn round_centavos(amount: Decimal) -> Decimal {
    amount.round_dp(CURRENCY_DECIMALS)
}
