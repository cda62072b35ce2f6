//! Keystroke-by-keystroke formatting example.
//!
//! Run with: `cargo run --example keystrokes`

use input_mask::{build_date_mask, format_edit, DateFormat, Edit, FieldKind, FieldSession};

fn show(value: &str, caret: usize) -> String {
    let mut chars: Vec<char> = value.chars().collect();
    chars.insert(caret.min(chars.len()), '|');
    chars.into_iter().collect()
}

fn main() {
    println!("=== Typing a Card Number ===\n");

    // The layout follows the network as soon as it can be classified
    let mut card = FieldSession::new(FieldKind::CreditCard);
    for key in "378282246310005".chars() {
        card.insert(&key.to_string());
        let network = card.network().map(|n| n.name()).unwrap_or("-");
        println!("  {:<20} {}", show(card.value(), card.cursor()), network);
    }
    println!();

    println!("=== Editing a Phone Number ===\n");

    let mut phone = FieldSession::with_value(FieldKind::phone(false), "9876");
    println!("  Start:              {}", show(phone.value(), phone.cursor()));

    phone.set_cursor(4);
    println!("  Caret after dash:   {}", show(phone.value(), phone.cursor()));

    // Backspace over a separator also removes the digit in front of it
    phone.backspace();
    println!("  Backspace:          {}", show(phone.value(), phone.cursor()));

    phone.set_cursor(2);
    phone.insert("7654");
    println!("  Type \"7654\":        {}", show(phone.value(), phone.cursor()));
    println!();

    println!("=== Host-Driven Edits ===\n");

    // A text field that owns its buffer reports each edit with the previous value
    let edits = [
        ("987", 3, "98"),
        ("9876", 4, "987"),
        ("9817-6", 3, "987-6"),
    ];
    for (value, caret, previous) in edits {
        let result = format_edit(FieldKind::phone(false), &Edit::new(value, caret, previous));
        println!(
            "  {:<10} -> {}",
            show(value, caret),
            show(&result.value, result.cursor_start)
        );
    }
    println!();

    println!("=== Date Placeholders ===\n");

    for digits in ["", "1", "12", "120", "1207", "120721"] {
        let mask = build_date_mask(digits, DateFormat::MmDdYy);
        println!(
            "  {:<8} filled: {:<10} placeholder: {}",
            format!("{:?}", digits),
            mask.filled(),
            mask.placeholder()
        );
    }
}
