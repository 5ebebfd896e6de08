//! # Minibank Reports
//!
//! Rendering for the interactive menu - account statements (plain text
//! and JSON) and the account listing.
//!
//! ## Example
//!
//! ```rust,ignore
//! use minibank_reports::render_statement;
//!
//! let view = teller.statement("12345678900")?;
//! println!("{}", render_statement(&view));
//! ```

pub mod listing;
pub mod statement;

// Re-export main functions
pub use listing::render_accounts;
pub use statement::{render_statement, render_statement_json};
