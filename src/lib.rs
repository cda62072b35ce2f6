//! # input_mask
//!
//! Incremental input formatting for card, phone and date fields.
//!
//! ## Features
//!
//! - Card network classification from partial numbers (7 networks)
//! - Per-network digit grouping (`4242 4242 4242 4242`, `3782 822463 10005`)
//! - Phone (`987-654-3210`, `987.654.3210`) and date (`MM/DD/YY`) fields
//! - Cursor preservation across reformatting, including backspace over separators
//! - Date placeholder overlays (`12/0` + `Y`)
//! - Masked display for hidden card fields
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use input_mask::{classify, format_edit, CardNetwork, Edit, FieldKind};
//!
//! assert_eq!(classify("4242424242424242"), CardNetwork::Visa);
//!
//! // The user typed a fifth digit; the formatter inserts a space and keeps
//! // the caret after the new digit
//! let result = format_edit(FieldKind::CreditCard, &Edit::new("42424", 5, "4242"));
//! assert_eq!(result.value, "4242 4");
//! assert_eq!(result.cursor_start, 6);
//! assert_eq!(result.network, Some(CardNetwork::Visa));
//! ```
//!
//! ## Field Sessions
//!
//! ```rust
//! use input_mask::{FieldKind, FieldSession};
//!
//! let mut field = FieldSession::new(FieldKind::CreditCard);
//! field.insert("371446");
//! assert_eq!(field.value(), "3714 46");
//! assert_eq!(field.network().unwrap().name(), "American Express");
//! ```
//!
//! ## Date Masks
//!
//! ```rust
//! use input_mask::{build_date_mask, DateFormat};
//!
//! let mask = build_date_mask("120", DateFormat::MmYy);
//! assert_eq!(mask.filled(), "12/0");
//! assert_eq!(mask.placeholder(), "Y");
//! ```
//!
//! ## Supported Card Networks
//!
//! | Network | Prefix | Grouping |
//! |---------|--------|----------|
//! | Visa | 4 | 4-4-4-4 |
//! | American Express | 34, 37 | 4-6-5 |
//! | UnionPay | 62 (except 622126-622925), 60 (except 6011), 81 | 4-4-4-7 |
//! | Diners Club | 300-305, 309, 36, 38, 39 | 4-6-4 |
//! | Discover | 6011, 622126-622925, 644-649, 65 | 4-4-4-4 |
//! | JCB | 3528-3589 | 4-4-4-4 |
//! | Mastercard | 51-55, 222100-272099 | 4-4-4-4 |
//!
//! Unmatched numbers are `Placeholder` below six digits and `Generic` after.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/deserialize field types |
//! | `config` | JSON field configuration |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod date;
pub mod edit;
pub mod error;
pub mod field;
pub mod format;
pub mod mask;
pub mod network;
pub mod session;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use classify::classify;
pub use config::FieldConfig;
pub use date::{build_date_mask, DateFormat, DateMask};
pub use edit::{format_edit, Edit, EditKind, FormatState, Formatted};
pub use error::FormatError;
pub use field::{FieldKind, PhoneStyle};
pub use network::CardNetwork;
pub use session::FieldSession;
