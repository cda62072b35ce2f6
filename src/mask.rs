//! Masking for hidden card fields.
//!
//! When a card field is not focused it shows the number with all but the
//! last four digits hidden, keeping the grouping so the layout does not jump:
//!
//! ```text
//! 4242 4242 4242 4242  ->  •••• •••• •••• 4242
//! ```
//!
//! Never log or display a full card number where a masked one will do.

use crate::format::format_card_number;

/// Character used for hidden digits.
pub const DEFAULT_MASK_CHAR: char = '•';

/// Number of trailing digits left visible by default.
pub const VISIBLE_DIGITS: usize = 4;

/// Hides every digit of a formatted value except the last `visible` ones.
///
/// Separators and other non-digit characters are kept as they are.
///
/// # Example
///
/// ```
/// use input_mask::mask::mask_digits;
///
/// assert_eq!(mask_digits("4242 4242 4242 4242", 4, '*'), "**** **** **** 4242");
/// assert_eq!(mask_digits("987-654-3210", 2, '#'), "###-###-##10");
/// ```
pub fn mask_digits(formatted: &str, visible: usize, mask_char: char) -> String {
    let digit_count = formatted.chars().filter(char::is_ascii_digit).count();
    let hidden = digit_count.saturating_sub(visible);

    let mut seen = 0;
    formatted
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen <= hidden {
                mask_char
            } else {
                c
            }
        })
        .collect()
}

/// Formats a card number and hides all but its last four digits.
///
/// # Example
///
/// ```
/// use input_mask::mask::mask_card_number;
///
/// assert_eq!(mask_card_number("4242424242424242"), "•••• •••• •••• 4242");
/// assert_eq!(mask_card_number("378282246310005"), "•••• •••••• •0005");
/// ```
pub fn mask_card_number(input: &str) -> String {
    mask_digits(&format_card_number(input), VISIBLE_DIGITS, DEFAULT_MASK_CHAR)
}

/// Extracts the last four digits of a value.
///
/// Returns an empty string if there are fewer than 4 digits.
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= VISIBLE_DIGITS {
        digits[digits.len() - VISIBLE_DIGITS..].iter().collect()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_card_16_digits() {
        assert_eq!(mask_card_number("4242424242424242"), "•••• •••• •••• 4242");
    }

    #[test]
    fn test_mask_keeps_separators() {
        assert_eq!(mask_digits("12/07/21", 2, '*'), "**/**/21");
    }

    #[test]
    fn test_mask_short_value() {
        assert_eq!(mask_digits("424", 4, '*'), "424");
        assert_eq!(mask_digits("", 4, '*'), "");
        assert_eq!(mask_card_number(""), "");
    }

    #[test]
    fn test_mask_everything() {
        assert_eq!(mask_digits("4242 42", 0, '*'), "**** **");
    }

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("4242 4242 4242 1234"), "1234");
        assert_eq!(last_four("123"), "");
    }
}
