//! Date field formats and placeholder masks.
//!
//! Date fields accept digits only and render them into a fixed slot
//! template such as `MM/YY`. While the user types, the field shows the typed
//! digits followed by the untyped rest of the template:
//!
//! ```text
//! digits   filled   placeholder
//! ""       ""       "MM/YY"
//! "1"      "1"      "M/YY"
//! "12"     "12"     "/YY"
//! "120"    "12/0"   "Y"
//! "1207"   "12/07"  ""
//! ```
//!
//! # Example
//!
//! ```
//! use input_mask::date::{build_date_mask, DateFormat};
//!
//! let mask = build_date_mask("1207", DateFormat::MmDdYy);
//! assert_eq!(mask.filled(), "12/07");
//! assert_eq!(mask.placeholder(), "/YY");
//! assert_eq!(mask.to_string(), "12/07/YY");
//! ```

use crate::error::FormatError;
use crate::format::format_date;
use std::fmt;
use std::str::FromStr;

/// Separator between date slots.
pub const DATE_SEPARATOR: char = '/';

/// Slot template of a date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DateFormat {
    /// `MM/YY`, as used for card expiry dates.
    #[default]
    MmYy,
    /// `MM/DD/YY`
    MmDdYy,
    /// `MM/DD/YYYY`
    MmDdYyyy,
}

impl DateFormat {
    /// Returns the placeholder template.
    #[inline]
    pub const fn template(&self) -> &'static str {
        match self {
            Self::MmYy => "MM/YY",
            Self::MmDdYy => "MM/DD/YY",
            Self::MmDdYyyy => "MM/DD/YYYY",
        }
    }

    /// Returns the digit groups between separators.
    #[inline]
    pub const fn groups(&self) -> &'static [usize] {
        match self {
            Self::MmYy => &[2, 2],
            Self::MmDdYy => &[2, 2, 2],
            Self::MmDdYyyy => &[2, 2, 4],
        }
    }

    /// Returns the number of digit slots.
    #[inline]
    pub const fn max_digits(&self) -> usize {
        match self {
            Self::MmYy => 4,
            Self::MmDdYy => 6,
            Self::MmDdYyyy => 8,
        }
    }

    /// Returns the lowercase name (`mmyy`, `mmddyy`, `mmddyyyy`).
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MmYy => "mmyy",
            Self::MmDdYy => "mmddyy",
            Self::MmDdYyyy => "mmddyyyy",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateFormat {
    type Err = FormatError;

    /// Accepts the lowercase names as well as the templates themselves.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match name.as_str() {
            "mmyy" => Ok(Self::MmYy),
            "mmddyy" => Ok(Self::MmDdYy),
            "mmddyyyy" => Ok(Self::MmDdYyyy),
            _ => Err(FormatError::UnknownDateFormat(s.to_string())),
        }
    }
}

/// A date field split into typed digits and the remaining template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMask {
    filled: String,
    placeholder: String,
}

impl DateMask {
    /// Returns the typed part, with separators implied by the typed digits.
    #[inline]
    pub fn filled(&self) -> &str {
        &self.filled
    }

    /// Returns the untyped rest of the template.
    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns true once every digit slot is filled.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.placeholder.is_empty()
    }

    /// Returns the `(filled, placeholder)` pair.
    pub fn into_parts(self) -> (String, String) {
        (self.filled, self.placeholder)
    }
}

impl fmt::Display for DateMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.filled, self.placeholder)
    }
}

/// Builds the placeholder overlay for a date field.
///
/// Non-digit characters in `input` are ignored and digits beyond the
/// template's slots are dropped. The placeholder starts exactly at the next
/// unfilled slot.
pub fn build_date_mask(input: &str, format: DateFormat) -> DateMask {
    let filled = format_date(input, format);
    let placeholder = format
        .template()
        .get(filled.len()..)
        .unwrap_or_default()
        .to_string();
    DateMask {
        filled,
        placeholder,
    }
}
