//! Incremental formatting with cursor preservation.
//!
//! Every time the user edits a formatted field, the host reports the raw text
//! now in the field, the selection, and the text that was there before. This
//! module turns that report into the reformatted text plus a caret position
//! that stays next to the digit the user just typed or deleted, even though
//! separators were inserted or removed around it.
//!
//! Cursor offsets at the boundary are character offsets into the displayed
//! string. Internally the cursor is tracked as a *logical* position: the
//! number of digits to its left, which survives regrouping unchanged.
//!
//! # Example
//!
//! ```
//! use input_mask::edit::{format_edit, Edit};
//! use input_mask::FieldKind;
//!
//! // The user typed "6" after "987"
//! let result = format_edit(FieldKind::phone(false), &Edit::new("9876", 4, "987"));
//! assert_eq!(result.value, "987-6");
//! assert_eq!(result.cursor_start, 5);
//!
//! // Backspace right after the dash deletes the "7" as well
//! let result = format_edit(FieldKind::phone(false), &Edit::new("9876", 3, "987-6"));
//! assert_eq!(result.value, "986");
//! assert_eq!(result.cursor_start, 2);
//! ```

use crate::field::FieldKind;
use crate::format::{format_with_layout, strip_formatting};
use crate::CardNetwork;
use tracing::{debug, trace};

/// A raw edit as reported by the host text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit<'a> {
    /// Text in the field after the edit, before reformatting.
    pub value: &'a str,
    /// Selection start, in characters.
    pub selection_start: usize,
    /// Selection end, in characters.
    pub selection_end: usize,
    /// Formatted text that was in the field before the edit.
    pub previous: &'a str,
}

impl<'a> Edit<'a> {
    /// Creates an edit with a collapsed selection (a plain caret).
    pub const fn new(value: &'a str, cursor: usize, previous: &'a str) -> Self {
        Self {
            value,
            selection_start: cursor,
            selection_end: cursor,
            previous,
        }
    }

    /// Creates an edit with an explicit selection range.
    pub const fn with_selection(
        value: &'a str,
        selection_start: usize,
        selection_end: usize,
        previous: &'a str,
    ) -> Self {
        Self {
            value,
            selection_start,
            selection_end,
            previous,
        }
    }
}

/// Direction of an edit, judged by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// More digits than before.
    Insertion,
    /// Fewer digits than before.
    Deletion,
    /// Same number of digits (replacement, caret move, separator typed).
    Replacement,
}

/// Digits and logical cursor derived from one edit.
///
/// Recreated for every edit; nothing here outlives the call that formats it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatState {
    raw_digits: String,
    cursor_start: usize,
    cursor_end: usize,
    prior_raw_digits: String,
    kind: EditKind,
}

impl FormatState {
    /// Derives the state for an edit.
    ///
    /// Selection offsets past the end of the value are clamped, and a reversed
    /// selection is reordered.
    pub fn from_edit(edit: &Edit<'_>) -> Self {
        let value: Vec<char> = edit.value.chars().collect();
        let start = edit.selection_start.min(value.len());
        let end = edit.selection_end.min(value.len());
        let (start, end) = if start <= end { (start, end) } else { (end, start) };

        let mut raw_digits = strip_formatting(edit.value);
        let prior_raw_digits = strip_formatting(edit.previous);
        let mut cursor_start = digits_before(&value, start);
        let mut cursor_end = digits_before(&value, end);

        let mut kind = match raw_digits.len().cmp(&prior_raw_digits.len()) {
            std::cmp::Ordering::Greater => EditKind::Insertion,
            std::cmp::Ordering::Less => EditKind::Deletion,
            std::cmp::Ordering::Equal => EditKind::Replacement,
        };

        if kind == EditKind::Replacement
            && start == end
            && cursor_start > 0
            && removed_separator_at(edit.previous, &value, start)
        {
            // Backspacing over a separator takes the digit in front of it too
            raw_digits.remove(cursor_start - 1);
            cursor_start -= 1;
            cursor_end = cursor_start;
            kind = EditKind::Deletion;
            debug!(cursor = cursor_start, "separator deleted, removing adjacent digit");
        }

        Self {
            raw_digits,
            cursor_start,
            cursor_end,
            prior_raw_digits,
            kind,
        }
    }

    /// Returns the digits after the edit.
    #[inline]
    pub fn raw_digits(&self) -> &str {
        &self.raw_digits
    }

    /// Returns the digits before the edit.
    #[inline]
    pub fn prior_raw_digits(&self) -> &str {
        &self.prior_raw_digits
    }

    /// Returns the number of digits left of the selection start.
    #[inline]
    pub const fn cursor_start(&self) -> usize {
        self.cursor_start
    }

    /// Returns the number of digits left of the selection end.
    #[inline]
    pub const fn cursor_end(&self) -> usize {
        self.cursor_end
    }

    /// Returns the direction of the edit.
    #[inline]
    pub const fn kind(&self) -> EditKind {
        self.kind
    }

    /// Formats the digits for a field and maps the logical cursor back onto
    /// the formatted text.
    pub fn format(&self, field: FieldKind) -> Formatted {
        let layout = field.layout(&self.raw_digits);
        let kept = self.raw_digits.len().min(layout.capacity());
        let value = format_with_layout(&self.raw_digits[..kept], &layout);

        let skip_separator = self.kind == EditKind::Insertion;
        let cursor_start = caret_after_digits(&value, self.cursor_start.min(kept), skip_separator);
        let cursor_end = caret_after_digits(&value, self.cursor_end.min(kept), skip_separator);

        trace!(
            field = %field,
            kind = ?self.kind,
            digits = kept,
            cursor_start,
            cursor_end,
            "formatted edit"
        );

        Formatted {
            value,
            cursor_start,
            cursor_end,
            network: layout.network,
        }
    }
}

/// Result of formatting an edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Formatted {
    /// Text to put back into the field.
    pub value: String,
    /// Selection start, in characters of `value`.
    pub cursor_start: usize,
    /// Selection end, in characters of `value`.
    pub cursor_end: usize,
    /// Classified network, for card fields only.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub network: Option<CardNetwork>,
}

impl Formatted {
    /// Formats a complete value with the caret at its end.
    pub fn from_value(field: FieldKind, value: &str) -> Self {
        let end = value.chars().count();
        format_edit(field, &Edit::new(value, end, ""))
    }

    /// Returns the digits of the formatted value.
    pub fn digits(&self) -> String {
        strip_formatting(&self.value)
    }

    /// Returns true if the selection is collapsed to a caret.
    #[inline]
    pub const fn is_caret(&self) -> bool {
        self.cursor_start == self.cursor_end
    }
}

/// Reformats a field after an edit.
///
/// This is the whole pipeline: derive the [`FormatState`], pick the layout
/// (re-classifying card numbers on every edit), regroup the digits and place
/// the caret. Never panics, whatever the offsets or text.
pub fn format_edit(field: FieldKind, edit: &Edit<'_>) -> Formatted {
    FormatState::from_edit(edit).format(field)
}

fn digits_before(value: &[char], position: usize) -> usize {
    value[..position].iter().filter(|c| c.is_ascii_digit()).count()
}

/// Returns true if `value` is `previous` with one non-digit removed at `position`.
fn removed_separator_at(previous: &str, value: &[char], position: usize) -> bool {
    let previous: Vec<char> = previous.chars().collect();
    if previous.len() != value.len() + 1 || position >= previous.len() {
        return false;
    }
    !previous[position].is_ascii_digit()
        && previous[..position] == value[..position]
        && previous[position + 1..] == value[position..]
}

/// Maps a logical cursor (digits to its left) to a character offset.
///
/// With `skip_separator`, a caret that would sit directly in front of a
/// separator is moved past it, so typing the last digit of a group leaves the
/// caret at the start of the next group.
fn caret_after_digits(formatted: &str, digits: usize, skip_separator: bool) -> usize {
    if digits == 0 {
        return 0;
    }

    let chars: Vec<char> = formatted.chars().collect();
    let mut seen = 0;
    for (i, c) in chars.iter().enumerate() {
        if !c.is_ascii_digit() {
            continue;
        }
        seen += 1;
        if seen == digits {
            let caret = i + 1;
            return match chars.get(caret) {
                Some(next) if skip_separator && !next.is_ascii_digit() => caret + 1,
                _ => caret,
            };
        }
    }
    chars.len()
}
