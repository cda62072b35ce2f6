//! Caller-owned field state.
//!
//! [`format_edit`](crate::edit::format_edit) is a pure function: it needs
//! the previous formatted value with every call. `FieldSession` keeps that
//! value between edits and can also play the part of the text field itself,
//! applying keystrokes the way a browser input does before handing the raw
//! result to the formatter. That makes it convenient for hosts without
//! their own text buffer, for the CLI, and for tests.
//!
//! # Example
//!
//! ```
//! use input_mask::{FieldKind, FieldSession};
//!
//! let mut session = FieldSession::new(FieldKind::phone(false));
//! session.insert("9876");
//! assert_eq!(session.value(), "987-6");
//!
//! session.set_cursor(4); // right after the dash
//! session.backspace();
//! assert_eq!(session.value(), "986");
//! assert_eq!(session.cursor(), 2);
//! ```

use crate::edit::{format_edit, Edit, Formatted};
use crate::field::FieldKind;
use crate::CardNetwork;
use zeroize::Zeroize;

/// A formatted input field and its selection.
///
/// The buffer is zeroed on drop, since card fields hold full card numbers.
#[derive(Clone)]
pub struct FieldSession {
    kind: FieldKind,
    current: Formatted,
}

impl FieldSession {
    /// Creates an empty field.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            current: Formatted {
                network: kind.layout("").network,
                ..Formatted::default()
            },
        }
    }

    /// Creates a field pre-filled with a value, caret at the end.
    pub fn with_value(kind: FieldKind, value: &str) -> Self {
        Self {
            kind,
            current: Formatted::from_value(kind, value),
        }
    }

    /// Returns the field kind.
    #[inline]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns the formatted value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.current.value
    }

    /// Returns the caret position (selection start).
    #[inline]
    pub const fn cursor(&self) -> usize {
        self.current.cursor_start
    }

    /// Returns the selection as `(start, end)`.
    #[inline]
    pub const fn selection(&self) -> (usize, usize) {
        (self.current.cursor_start, self.current.cursor_end)
    }

    /// Returns the classified network, for card fields.
    #[inline]
    pub const fn network(&self) -> Option<CardNetwork> {
        self.current.network
    }

    /// Returns the last formatting result.
    #[inline]
    pub fn formatted(&self) -> &Formatted {
        &self.current
    }

    /// Returns the digits in the field.
    pub fn digits(&self) -> String {
        self.current.digits()
    }

    /// Applies a raw edit reported by a host text field.
    ///
    /// `value` is the text the host shows after the edit; the previous value is
    /// the one this session last produced.
    pub fn apply(&mut self, value: &str, selection_start: usize, selection_end: usize) -> &Formatted {
        let edit = Edit::with_selection(value, selection_start, selection_end, &self.current.value);
        let next = format_edit(self.kind, &edit);
        self.replace(next);
        &self.current
    }

    /// Moves the caret, collapsing any selection.
    pub fn set_cursor(&mut self, position: usize) {
        self.select(position, position);
    }

    /// Selects a range of the formatted value.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.current.value.chars().count();
        let (start, end) = (start.min(len), end.min(len));
        self.current.cursor_start = start.min(end);
        self.current.cursor_end = start.max(end);
    }

    /// Types text at the caret, replacing any selection.
    pub fn insert(&mut self, text: &str) -> &Formatted {
        let (start, end) = self.selection();
        let mut chars = self.chars();
        let inserted: Vec<char> = text.chars().collect();
        let caret = start + inserted.len();
        chars.splice(start..end, inserted);
        self.apply_chars(chars, caret)
    }

    /// Deletes the selection, or the character before the caret.
    pub fn backspace(&mut self) -> &Formatted {
        let (start, end) = self.selection();
        let mut chars = self.chars();
        let caret = if start != end {
            chars.drain(start..end);
            start
        } else if start > 0 {
            chars.remove(start - 1);
            start - 1
        } else {
            return &self.current;
        };
        self.apply_chars(chars, caret)
    }

    /// Deletes the selection, or the first digit after the caret.
    ///
    /// Separators between the caret and that digit are stepped over rather
    /// than deleted, since the formatter would only put them back.
    pub fn delete_forward(&mut self) -> &Formatted {
        let (start, end) = self.selection();
        let mut chars = self.chars();
        if start != end {
            chars.drain(start..end);
        } else if let Some(offset) = chars[start..].iter().position(char::is_ascii_digit) {
            chars.remove(start + offset);
        } else {
            return &self.current;
        }
        self.apply_chars(chars, start)
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        let cleared = Self::new(self.kind).current.clone();
        self.replace(cleared);
    }

    fn chars(&self) -> Vec<char> {
        self.current.value.chars().collect()
    }

    fn apply_chars(&mut self, chars: Vec<char>, caret: usize) -> &Formatted {
        let mut raw: String = chars.into_iter().collect();
        self.apply(&raw, caret, caret);
        raw.zeroize();
        &self.current
    }

    fn replace(&mut self, next: Formatted) {
        self.current.value.zeroize();
        self.current = next;
    }
}

impl std::fmt::Debug for FieldSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Card numbers are only ever shown masked
        let value = match self.kind {
            FieldKind::CreditCard => crate::mask::mask_card_number(&self.current.value),
            _ => self.current.value.clone(),
        };
        f.debug_struct("FieldSession")
            .field("kind", &self.kind)
            .field("value", &value)
            .field("selection", &self.selection())
            .field("network", &self.current.network)
            .finish()
    }
}

impl Drop for FieldSession {
    fn drop(&mut self) {
        self.current.value.zeroize();
    }
}
