//! Field kinds and their display layouts.
//!
//! A `FieldKind` selects how an input field groups its digits. Card fields
//! pick their layout from the network classified on each edit; phone and
//! date fields use a fixed layout.

use crate::classify::classify;
use crate::date::DateFormat;
use crate::error::FormatError;
use crate::CardNetwork;
use std::fmt;
use std::str::FromStr;

/// Separator style for phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum PhoneStyle {
    /// `987-654-3210`
    #[default]
    Dash,
    /// `987.654.3210`
    Dot,
}

impl PhoneStyle {
    /// Picks the style from a boolean "use dots" flag.
    #[inline]
    pub const fn from_dot_flag(use_dots: bool) -> Self {
        if use_dots {
            Self::Dot
        } else {
            Self::Dash
        }
    }

    /// Returns the separator character.
    #[inline]
    pub const fn separator(&self) -> char {
        match self {
            Self::Dash => '-',
            Self::Dot => '.',
        }
    }
}

impl FromStr for PhoneStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dash" | "-" => Ok(Self::Dash),
            "dot" | "." => Ok(Self::Dot),
            _ => Err(FormatError::UnknownPhoneStyle(s.to_string())),
        }
    }
}

/// Phone number grouping: 3-3-4.
pub const PHONE_GROUPS: &[usize] = &[3, 3, 4];

/// Separator used between card number groups.
pub const CARD_SEPARATOR: char = ' ';

/// The kind of value an input field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "kebab-case")
)]
pub enum FieldKind {
    /// Card number, grouped by the classified network.
    #[default]
    CreditCard,
    /// Ten digit phone number.
    Phone {
        /// Separator style.
        #[cfg_attr(feature = "serde", serde(default))]
        style: PhoneStyle,
    },
    /// Date entered as digits.
    Date {
        /// Slot template.
        format: DateFormat,
    },
}

impl FieldKind {
    /// Phone field with the separator chosen by a "use dots" flag.
    #[inline]
    pub const fn phone(use_dots: bool) -> Self {
        Self::Phone {
            style: PhoneStyle::from_dot_flag(use_dots),
        }
    }

    /// Date field with the given format.
    #[inline]
    pub const fn date(format: DateFormat) -> Self {
        Self::Date { format }
    }

    /// Returns the layout to apply to the given digits.
    pub fn layout(&self, digits: &str) -> Layout {
        match *self {
            Self::CreditCard => Layout::for_network(classify(digits)),
            Self::Phone { style } => Layout {
                groups: PHONE_GROUPS,
                separator: style.separator(),
                network: None,
            },
            Self::Date { format } => Layout {
                groups: format.groups(),
                separator: crate::date::DATE_SEPARATOR,
                network: None,
            },
        }
    }

    /// Returns the canonical name used by `FromStr`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreditCard => "card",
            Self::Phone {
                style: PhoneStyle::Dash,
            } => "phone",
            Self::Phone {
                style: PhoneStyle::Dot,
            } => "phone-dot",
            Self::Date {
                format: DateFormat::MmYy,
            } => "date-mmyy",
            Self::Date {
                format: DateFormat::MmDdYy,
            } => "date-mmddyy",
            Self::Date {
                format: DateFormat::MmDdYyyy,
            } => "date-mmddyyyy",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "card" | "credit-card" | "cc" => Ok(Self::CreditCard),
            "phone" | "phone-dash" => Ok(Self::phone(false)),
            "phone-dot" => Ok(Self::phone(true)),
            "date" => Ok(Self::date(DateFormat::default())),
            _ => match name.strip_prefix("date-") {
                Some(format) => format
                    .parse()
                    .map(Self::date)
                    .map_err(|_| FormatError::UnknownFieldKind(s.to_string())),
                None => Err(FormatError::UnknownFieldKind(s.to_string())),
            },
        }
    }
}

/// Grouping applied to a field's digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Group widths; digits beyond their sum are dropped.
    pub groups: &'static [usize],
    /// Character inserted between groups.
    pub separator: char,
    /// Classified network, for card fields only.
    pub network: Option<CardNetwork>,
}

impl Layout {
    /// Card layout for a network.
    pub const fn for_network(network: CardNetwork) -> Self {
        Self {
            groups: network.groups(),
            separator: CARD_SEPARATOR,
            network: Some(network),
        }
    }

    /// Returns the number of digits the layout holds.
    pub fn capacity(&self) -> usize {
        self.groups.iter().sum()
    }
}
