//! Fuzz target for incremental edits.
//!
//! Feeds arbitrary edits and keystrokes through the formatter and checks
//! that the caret always lands inside the formatted value.

#![no_main]

use arbitrary::Arbitrary;
use input_mask::{format_edit, DateFormat, Edit, FieldKind, FieldSession};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Key {
    Type(char),
    Paste(String),
    Backspace,
    Delete,
    MoveTo(u8),
    Select(u8, u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    kind: u8,
    value: String,
    previous: String,
    selection_start: u16,
    selection_end: u16,
    keys: Vec<Key>,
}

fn field_kind(tag: u8) -> FieldKind {
    match tag % 5 {
        0 => FieldKind::CreditCard,
        1 => FieldKind::phone(false),
        2 => FieldKind::phone(true),
        3 => FieldKind::date(DateFormat::MmYy),
        _ => FieldKind::date(DateFormat::MmDdYyyy),
    }
}

fuzz_target!(|input: Input| {
    let kind = field_kind(input.kind);

    let edit = Edit::with_selection(
        &input.value,
        usize::from(input.selection_start),
        usize::from(input.selection_end),
        &input.previous,
    );
    let result = format_edit(kind, &edit);
    assert!(result.cursor_start <= result.cursor_end);
    assert!(result.cursor_end <= result.value.chars().count());

    let mut session = FieldSession::new(kind);
    for key in input.keys {
        match key {
            Key::Type(c) => {
                session.insert(&c.to_string());
            }
            Key::Paste(text) => {
                session.insert(&text);
            }
            Key::Backspace => {
                session.backspace();
            }
            Key::Delete => {
                session.delete_forward();
            }
            Key::MoveTo(position) => session.set_cursor(usize::from(position)),
            Key::Select(start, end) => session.select(usize::from(start), usize::from(end)),
        }
        let (start, end) = session.selection();
        assert!(start <= end && end <= session.value().chars().count());
    }
});
