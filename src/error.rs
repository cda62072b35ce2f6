//! Error types for field configuration.
//!
//! Formatting itself never fails: every input is treated as best-effort text
//! and clamped or truncated. Errors only come from turning names and
//! configuration documents into field settings.

use std::fmt;

/// Errors that can occur while resolving field settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The field kind name is not recognised.
    UnknownFieldKind(String),

    /// The date format name is not recognised.
    UnknownDateFormat(String),

    /// The phone separator style name is not recognised.
    UnknownPhoneStyle(String),

    /// A configuration document could not be read or parsed.
    InvalidConfig {
        /// Where the configuration came from (a path or `"<inline>"`).
        source: String,
        /// The underlying reader or parser message.
        message: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFieldKind(name) => {
                write!(
                    f,
                    "unknown field kind '{}' (expected card, phone, phone-dot, date-mmyy, date-mmddyy or date-mmddyyyy)",
                    name
                )
            }

            Self::UnknownDateFormat(name) => {
                write!(
                    f,
                    "unknown date format '{}' (expected mmyy, mmddyy or mmddyyyy)",
                    name
                )
            }

            Self::UnknownPhoneStyle(name) => {
                write!(f, "unknown phone style '{}' (expected dash or dot)", name)
            }

            Self::InvalidConfig { source, message } => {
                write!(f, "invalid field configuration in {}: {}", source, message)
            }
        }
    }
}

impl std::error::Error for FormatError {}
