//! Digit grouping for card, phone and date fields.
//!
//! This module formats complete or partial values in one shot. The
//! keystroke-by-keystroke variant with cursor tracking lives in
//! [`crate::edit`] and uses the same grouping.
//!
//! # Format Conventions
//!
//! - **Visa/Mastercard/Discover/JCB**: `XXXX XXXX XXXX XXXX`
//! - **American Express**: `XXXX XXXXXX XXXXX`
//! - **Diners Club**: `XXXX XXXXXX XXXX`
//! - **UnionPay/unknown**: `XXXX XXXX XXXX XXXXXXX`
//! - **Phone**: `XXX-XXX-XXXX` or `XXX.XXX.XXXX`
//! - **Dates**: `MM/YY`, `MM/DD/YY`, `MM/DD/YYYY`
//!
//! A separator is only written in front of a group that has digits, so
//! partial values never end in a separator. Digits beyond the layout's
//! capacity are dropped.
//!
//! # Example
//!
//! ```
//! use input_mask::format::{format_card_number, format_date, format_phone};
//! use input_mask::{DateFormat, PhoneStyle};
//!
//! assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
//! assert_eq!(format_card_number("371446"), "3714 46");
//! assert_eq!(format_phone("9876543210", PhoneStyle::Dash), "987-654-3210");
//! assert_eq!(format_date("120721", DateFormat::MmDdYy), "12/07/21");
//! ```

use crate::classify::classify;
use crate::date::DateFormat;
use crate::field::{FieldKind, Layout, PhoneStyle, PHONE_GROUPS};
use crate::CardNetwork;

/// Strips all formatting, leaving only ASCII digits.
///
/// # Example
///
/// ```
/// use input_mask::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4242 4242 4242 4242"), "4242424242424242");
/// assert_eq!(strip_formatting("987-654-3210"), "9876543210");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Groups the digits of `input` into fixed-width groups.
///
/// Non-digit characters are ignored. Digits past the sum of `groups` are
/// dropped.
///
/// # Example
///
/// ```
/// use input_mask::format::group_digits;
///
/// assert_eq!(group_digits("123456", &[2, 2, 2], '/'), "12/34/56");
/// assert_eq!(group_digits("123", &[2, 2, 2], '/'), "12/3");
/// assert_eq!(group_digits("12345678", &[2, 2], '/'), "12/34");
/// ```
pub fn group_digits(input: &str, groups: &[usize], separator: char) -> String {
    let mut digits = input.chars().filter(char::is_ascii_digit);
    let mut result = String::with_capacity(input.len() + groups.len());

    for (i, &size) in groups.iter().enumerate() {
        let mut group = digits.by_ref().take(size).peekable();
        if group.peek().is_none() {
            break;
        }
        if i > 0 {
            result.push(separator);
        }
        result.extend(group);
    }

    result
}

/// Formats digits with a field layout.
pub fn format_with_layout(input: &str, layout: &Layout) -> String {
    group_digits(input, layout.groups, layout.separator)
}

/// Formats a card number with the grouping of its classified network.
///
/// # Example
///
/// ```
/// use input_mask::format::format_card_number;
///
/// assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
/// assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
/// ```
pub fn format_card_number(input: &str) -> String {
    format_card_for_network(input, classify(input))
}

/// Formats a card number for a specific network.
///
/// Useful when the network is already known and the grouping should not
/// depend on the prefix.
///
/// # Example
///
/// ```
/// use input_mask::format::format_card_for_network;
/// use input_mask::CardNetwork;
///
/// assert_eq!(
///     format_card_for_network("378282246310005", CardNetwork::Amex),
///     "3782 822463 10005"
/// );
/// ```
pub fn format_card_for_network(input: &str, network: CardNetwork) -> String {
    format_with_layout(input, &Layout::for_network(network))
}

/// Formats a ten digit phone number.
pub fn format_phone(input: &str, style: PhoneStyle) -> String {
    group_digits(input, PHONE_GROUPS, style.separator())
}

/// Formats a date entered as digits.
pub fn format_date(input: &str, format: DateFormat) -> String {
    group_digits(input, format.groups(), crate::date::DATE_SEPARATOR)
}

/// Formats a value for any field kind.
pub fn format_field(input: &str, kind: FieldKind) -> String {
    format_with_layout(input, &kind.layout(input))
}

/// Splits the digits of `input` into groups for flexible rendering.
///
/// # Example
///
/// ```
/// use input_mask::format::split_into_groups;
///
/// assert_eq!(split_into_groups("3714496353", &[4, 6, 5]), vec!["3714", "496353"]);
/// ```
pub fn split_into_groups(input: &str, groups: &[usize]) -> Vec<String> {
    let mut digits = input.chars().filter(char::is_ascii_digit);
    groups
        .iter()
        .map(|&size| digits.by_ref().take(size).collect::<String>())
        .take_while(|group| !group.is_empty())
        .collect()
}
