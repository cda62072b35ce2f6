//! Card network types.
//!
//! This module provides the `CardNetwork` enum identifying the payment
//! network inferred from a card number prefix, together with the digit
//! grouping each network is displayed with.

use std::fmt;

/// Payment card networks recognised while a card number is being typed.
///
/// `Generic` and `Placeholder` are not real networks: `Placeholder` means
/// too few digits have been typed to decide, `Generic` means enough digits
/// are present but no known prefix matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum CardNetwork {
    /// Visa - Prefix 4, grouped 4-4-4-4
    Visa,
    /// American Express - Prefix 34, 37, grouped 4-6-5
    Amex,
    /// Diners Club - Prefix 300-305, 309, 36, 38, 39, grouped 4-6-4
    DinersClub,
    /// Discover - Prefix 6011, 622126-622925, 644-649, 65, grouped 4-4-4-4
    Discover,
    /// JCB - Prefix 3528-3589, grouped 4-4-4-4
    Jcb,
    /// Mastercard - Prefix 51-55, 222100-272099, grouped 4-4-4-4
    Mastercard,
    /// UnionPay - Prefix 62, 60, 81, grouped 4-4-4-7
    UnionPay,
    /// Six or more digits with no known prefix
    Generic,
    /// Fewer than six digits with no known prefix
    Placeholder,
}

impl CardNetwork {
    /// Every network, in declaration order.
    pub const ALL: [CardNetwork; 9] = [
        Self::Visa,
        Self::Amex,
        Self::DinersClub,
        Self::Discover,
        Self::Jcb,
        Self::Mastercard,
        Self::UnionPay,
        Self::Generic,
        Self::Placeholder,
    ];

    /// Returns the display grouping for this network.
    ///
    /// The last group absorbs the remaining digits up to `max_length()`.
    #[inline]
    pub const fn groups(&self) -> &'static [usize] {
        match self {
            Self::Visa | Self::Discover | Self::Jcb | Self::Mastercard => &[4, 4, 4, 4],
            Self::Amex => &[4, 6, 5],
            Self::DinersClub => &[4, 6, 4],
            Self::UnionPay | Self::Generic | Self::Placeholder => &[4, 4, 4, 7],
        }
    }

    /// Returns the maximum number of digits accepted for this network.
    #[inline]
    pub const fn max_length(&self) -> usize {
        let groups = self.groups();
        let mut total = 0;
        let mut i = 0;
        while i < groups.len() {
            total += groups[i];
            i += 1;
        }
        total
    }

    /// Returns true if this is one of the seven named payment networks.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Generic | Self::Placeholder)
    }

    /// Returns a human-readable name for the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Amex => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::Mastercard => "Mastercard",
            Self::UnionPay => "UnionPay",
            Self::Generic => "Generic",
            Self::Placeholder => "Placeholder",
        }
    }

    /// Returns the identifier used by card icon sets (`visa`, `diners-club`, ...).
    #[inline]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Amex => "amex",
            Self::DinersClub => "diners-club",
            Self::Discover => "discover",
            Self::Jcb => "jcb",
            Self::Mastercard => "mastercard",
            Self::UnionPay => "union-pay",
            Self::Generic => "generic",
            Self::Placeholder => "placeholder",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
