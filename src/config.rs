//! Field configuration.
//!
//! A `FieldConfig` bundles what an input component passes down as props:
//! which kind of field it is, whether a card number is shown hidden, and the
//! mask character used when it is. With the `config` feature it can be
//! loaded from JSON:
//!
//! ```json
//! { "kind": { "type": "phone", "style": "dot" }, "hidden": false }
//! ```

use crate::edit::Formatted;
use crate::field::FieldKind;
use crate::mask::{mask_digits, DEFAULT_MASK_CHAR, VISIBLE_DIGITS};
use crate::session::FieldSession;

#[cfg(feature = "config")]
use crate::error::FormatError;

/// Settings for one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct FieldConfig {
    /// What the field holds.
    pub kind: FieldKind,
    /// Show all but the last four digits masked.
    pub hidden: bool,
    /// Character used for masked digits.
    pub mask_char: char,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            kind: FieldKind::default(),
            hidden: false,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }
}

impl FieldConfig {
    /// Config for a visible field of the given kind.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Sets whether the value is displayed masked.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Sets the mask character.
    pub fn mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Starts an empty field session with this config's kind.
    pub fn session(&self) -> FieldSession {
        FieldSession::new(self.kind)
    }

    /// Returns the text to display for a formatting result.
    pub fn display(&self, formatted: &Formatted) -> String {
        if self.hidden {
            mask_digits(&formatted.value, VISIBLE_DIGITS, self.mask_char)
        } else {
            formatted.value.clone()
        }
    }

    /// Parses a JSON config document.
    #[cfg(feature = "config")]
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        serde_json::from_str(json).map_err(|e| FormatError::InvalidConfig {
            source: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Reads and parses a JSON config file.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self, FormatError> {
        let path = path.as_ref();
        let invalid = |message: String| FormatError::InvalidConfig {
            source: path.display().to_string(),
            message,
        };
        let json = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| invalid(e.to_string()))
    }
}
