//! Card network classification using IIN prefix rules.
//!
//! The first digits of a card number (the Issuer Identification Number)
//! identify its network. Classification runs on every keystroke, so it has
//! to cope with partial numbers: a rule that needs a six digit prefix simply
//! does not match until six digits are present.
//!
//! Rules live in the ordered [`RULES`] table and are evaluated
//! first-match-wins. The order matters where ranges overlap: UnionPay's `62`
//! range gives way to Discover's `622126-622925` by exclusion inside the
//! UnionPay rule.

use crate::CardNetwork;
use tracing::trace;

/// Number of leading digits any rule looks at.
pub const PREFIX_DIGITS: usize = 6;

/// Digits typed without a match before classification falls back to `Generic`.
pub const GENERIC_THRESHOLD: usize = 6;

/// The leading digits of a (possibly partial) card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    digits: [u8; PREFIX_DIGITS],
    /// Total number of digits in the input, not capped at `PREFIX_DIGITS`.
    length: usize,
}

impl Prefix {
    /// Builds a prefix from any input, ignoring non-digit characters.
    pub fn new(input: &str) -> Self {
        let mut digits = [0u8; PREFIX_DIGITS];
        let mut length = 0;
        for c in input.chars().filter(char::is_ascii_digit) {
            if length < PREFIX_DIGITS {
                digits[length] = c as u8 - b'0';
            }
            length += 1;
        }
        Self { digits, length }
    }

    /// Returns the number of digits in the input.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns true if no digits were typed.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the first `n` digits as a number, or `None` if fewer than `n`
    /// digits are present.
    #[inline]
    pub fn value(&self, n: usize) -> Option<u32> {
        if n == 0 || n > PREFIX_DIGITS || self.length < n {
            return None;
        }
        Some(
            self.digits[..n]
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + u32::from(d)),
        )
    }
}

/// A single entry of the classification table.
#[derive(Clone, Copy)]
pub struct ClassificationRule {
    /// Network reported when the predicate matches.
    pub network: CardNetwork,
    /// Predicate over the typed prefix.
    pub matches: fn(&Prefix) -> bool,
}

impl std::fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

/// Classification rules in evaluation order.
pub const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        network: CardNetwork::Visa,
        matches: is_visa,
    },
    ClassificationRule {
        network: CardNetwork::Amex,
        matches: is_amex,
    },
    ClassificationRule {
        network: CardNetwork::UnionPay,
        matches: is_union_pay,
    },
    ClassificationRule {
        network: CardNetwork::DinersClub,
        matches: is_diners_club,
    },
    ClassificationRule {
        network: CardNetwork::Discover,
        matches: is_discover,
    },
    ClassificationRule {
        network: CardNetwork::Jcb,
        matches: is_jcb,
    },
    ClassificationRule {
        network: CardNetwork::Mastercard,
        matches: is_mastercard,
    },
];

/// Classifies a (possibly partial, possibly formatted) card number.
///
/// Always returns exactly one network. Inputs that match no rule are
/// `Placeholder` below six digits and `Generic` from six digits on.
///
/// # Example
///
/// ```
/// use input_mask::classify::classify;
/// use input_mask::CardNetwork;
///
/// assert_eq!(classify("4242424242424242"), CardNetwork::Visa);
/// assert_eq!(classify("3714 46"), CardNetwork::Amex);
/// assert_eq!(classify("12"), CardNetwork::Placeholder);
/// assert_eq!(classify("123456"), CardNetwork::Generic);
/// ```
pub fn classify(input: &str) -> CardNetwork {
    classify_prefix(&Prefix::new(input))
}

/// Classifies an already extracted prefix.
pub fn classify_prefix(prefix: &Prefix) -> CardNetwork {
    let network = RULES
        .iter()
        .find(|rule| (rule.matches)(prefix))
        .map(|rule| rule.network)
        .unwrap_or(if prefix.len() < GENERIC_THRESHOLD {
            CardNetwork::Placeholder
        } else {
            CardNetwork::Generic
        });
    trace!(digits = prefix.len(), %network, "classified card prefix");
    network
}

fn is_visa(prefix: &Prefix) -> bool {
    prefix.value(1) == Some(4)
}

fn is_amex(prefix: &Prefix) -> bool {
    matches!(prefix.value(2), Some(34 | 37))
}

fn is_union_pay(prefix: &Prefix) -> bool {
    match prefix.value(2) {
        // 62 belongs to Discover inside 622126-622925
        Some(62) => !matches!(prefix.value(6), Some(622_126..=622_925)),
        Some(81) => true,
        Some(60) => prefix.value(4) != Some(6011),
        _ => false,
    }
}

fn is_diners_club(prefix: &Prefix) -> bool {
    matches!(prefix.value(3), Some(300..=305 | 309)) || matches!(prefix.value(2), Some(36 | 38 | 39))
}

fn is_discover(prefix: &Prefix) -> bool {
    prefix.value(4) == Some(6011)
        || matches!(prefix.value(6), Some(622_126..=622_925))
        || matches!(prefix.value(3), Some(644..=649))
        || prefix.value(2) == Some(65)
}

fn is_jcb(prefix: &Prefix) -> bool {
    matches!(prefix.value(4), Some(3528..=3589))
}

fn is_mastercard(prefix: &Prefix) -> bool {
    matches!(prefix.value(2), Some(51..=55)) || matches!(prefix.value(6), Some(222_100..=272_099))
}
