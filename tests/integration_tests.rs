//! Integration tests for input_mask.
//!
//! These tests drive the public API the way an input component does:
//! one keystroke at a time, with the previous value fed back in.

use input_mask::{
    build_date_mask, classify, format, format_edit, mask, CardNetwork, DateFormat, Edit,
    FieldConfig, FieldKind, FieldSession, FormatError, Formatted, PhoneStyle,
};

// =============================================================================
// REAL-WORLD TEST CARD NUMBERS
// =============================================================================
// Official test card numbers from payment processors. Not real cards.

mod test_cards {
    pub const VISA_1: &str = "4111111111111111";
    pub const VISA_2: &str = "4242424242424242";

    pub const MC_1: &str = "5555555555554444";
    pub const MC_2: &str = "5105105105105100";
    pub const MC_2SERIES: &str = "2223003122003222";

    pub const AMEX_1: &str = "378282246310005";
    pub const AMEX_2: &str = "371449635398431";

    pub const DISCOVER_1: &str = "6011111111111117";
    pub const DISCOVER_2: &str = "6445644564456445";

    pub const DINERS_1: &str = "30569309025904";
    pub const DINERS_2: &str = "38520000023237";

    pub const JCB_1: &str = "3530111333300000";
    pub const JCB_2: &str = "3566002020360505";

    pub const UNION_PAY: &str = "6200000000000005";
}

fn type_keys(kind: FieldKind, keys: &str) -> FieldSession {
    let mut session = FieldSession::new(kind);
    for key in keys.chars() {
        session.insert(&key.to_string());
    }
    session
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

#[test]
fn test_all_test_cards_classify() {
    let cases = [
        (test_cards::VISA_1, CardNetwork::Visa),
        (test_cards::VISA_2, CardNetwork::Visa),
        (test_cards::MC_1, CardNetwork::Mastercard),
        (test_cards::MC_2, CardNetwork::Mastercard),
        (test_cards::MC_2SERIES, CardNetwork::Mastercard),
        (test_cards::AMEX_1, CardNetwork::Amex),
        (test_cards::AMEX_2, CardNetwork::Amex),
        (test_cards::DISCOVER_1, CardNetwork::Discover),
        (test_cards::DISCOVER_2, CardNetwork::Discover),
        (test_cards::DINERS_1, CardNetwork::DinersClub),
        (test_cards::DINERS_2, CardNetwork::DinersClub),
        (test_cards::JCB_1, CardNetwork::Jcb),
        (test_cards::JCB_2, CardNetwork::Jcb),
        (test_cards::UNION_PAY, CardNetwork::UnionPay),
    ];
    for (card, expected) in cases {
        assert_eq!(classify(card), expected, "classify({})", card);
    }
}

#[test]
fn test_union_pay_discover_overlap() {
    assert_eq!(classify("622125"), CardNetwork::UnionPay);
    assert_eq!(classify("622126"), CardNetwork::Discover);
    assert_eq!(classify("622925"), CardNetwork::Discover);
    assert_eq!(classify("622926"), CardNetwork::UnionPay);
    // Not enough digits to rule out Discover yet
    assert_eq!(classify("62212"), CardNetwork::UnionPay);

    assert_eq!(classify("6011"), CardNetwork::Discover);
    assert_eq!(classify("6012"), CardNetwork::UnionPay);
    assert_eq!(classify("601"), CardNetwork::UnionPay);
    assert_eq!(classify("81"), CardNetwork::UnionPay);
}

#[test]
fn test_range_boundaries() {
    assert_eq!(classify("222099"), CardNetwork::Generic);
    assert_eq!(classify("222100"), CardNetwork::Mastercard);
    assert_eq!(classify("272099"), CardNetwork::Mastercard);
    assert_eq!(classify("272100"), CardNetwork::Generic);

    assert_eq!(classify("3527"), CardNetwork::Placeholder);
    assert_eq!(classify("3528"), CardNetwork::Jcb);
    assert_eq!(classify("3589"), CardNetwork::Jcb);
    assert_eq!(classify("3590"), CardNetwork::Placeholder);

    assert_eq!(classify("305"), CardNetwork::DinersClub);
    assert_eq!(classify("306"), CardNetwork::Placeholder);
    assert_eq!(classify("309"), CardNetwork::DinersClub);

    assert_eq!(classify("643"), CardNetwork::Placeholder);
    assert_eq!(classify("644"), CardNetwork::Discover);
    assert_eq!(classify("649"), CardNetwork::Discover);

    assert_eq!(classify("50"), CardNetwork::Placeholder);
    assert_eq!(classify("51"), CardNetwork::Mastercard);
    assert_eq!(classify("55"), CardNetwork::Mastercard);
    assert_eq!(classify("56"), CardNetwork::Placeholder);
}

#[test]
fn test_placeholder_becomes_generic() {
    assert_eq!(classify(""), CardNetwork::Placeholder);
    assert_eq!(classify("99999"), CardNetwork::Placeholder);
    assert_eq!(classify("999999"), CardNetwork::Generic);
    assert_eq!(classify("9999 99"), CardNetwork::Generic);
}

// =============================================================================
// FORMATTING
// =============================================================================

#[test]
fn test_test_cards_format_by_network() {
    let cases = [
        (test_cards::VISA_2, "4242 4242 4242 4242"),
        (test_cards::MC_1, "5555 5555 5555 4444"),
        (test_cards::AMEX_1, "3782 822463 10005"),
        (test_cards::DISCOVER_1, "6011 1111 1111 1117"),
        (test_cards::DINERS_1, "3056 930902 5904"),
        (test_cards::JCB_1, "3530 1113 3330 0000"),
        (test_cards::UNION_PAY, "6200 0000 0000 0005"),
    ];
    for (card, expected) in cases {
        assert_eq!(format::format_card_number(card), expected, "format({})", card);
    }
}

#[test]
fn test_generic_uses_long_layout() {
    assert_eq!(
        format::format_card_number("9999999999999999999"),
        "9999 9999 9999 9999999"
    );
}

#[test]
fn test_format_ignores_existing_formatting() {
    assert_eq!(
        format::format_card_number("4242-4242 4242.4242"),
        "4242 4242 4242 4242"
    );
    assert_eq!(
        format::format_phone("(987) 654-3210", PhoneStyle::Dot),
        "987.654.3210"
    );
}

// =============================================================================
// KEYSTROKE SCENARIOS
// =============================================================================

#[test]
fn test_typing_amex_regroups_after_classification() {
    let mut session = FieldSession::new(FieldKind::CreditCard);
    session.insert("3");
    assert_eq!(session.network(), Some(CardNetwork::Placeholder));
    session.insert("7");
    assert_eq!(session.network(), Some(CardNetwork::Amex));

    for key in "8282246310005".chars() {
        session.insert(&key.to_string());
    }
    assert_eq!(session.value(), "3782 822463 10005");
    assert_eq!(session.cursor(), 17);

    // A sixteenth digit does not fit the Amex layout
    session.insert("9");
    assert_eq!(session.value(), "3782 822463 10005");
    assert_eq!(session.cursor(), 17);
}

#[test]
fn test_typing_phone_with_dots() {
    let session = type_keys(FieldKind::phone(true), "9876543210");
    assert_eq!(session.value(), "987.654.3210");
    assert_eq!(session.cursor(), 12);
    assert_eq!(session.network(), None);
}

#[test]
fn test_typing_date() {
    let session = type_keys(FieldKind::date(DateFormat::MmDdYyyy), "12072021");
    assert_eq!(session.value(), "12/07/2021");

    let session = type_keys(FieldKind::date(DateFormat::MmYy), "12");
    assert_eq!(session.value(), "12");
    assert_eq!(session.cursor(), 2);
}

#[test]
fn test_letters_are_rejected() {
    let session = type_keys(FieldKind::phone(false), "98a7b6");
    assert_eq!(session.value(), "987-6");
    assert_eq!(session.cursor(), 5);
}

#[test]
fn test_phone_insertion_then_backspace_over_dash() {
    let result = format_edit(FieldKind::phone(false), &Edit::new("9876", 4, "987"));
    assert_eq!(result.value, "987-6");
    assert_eq!(result.cursor_start, 5);

    // Backspace with the caret right after the dash
    let result = format_edit(FieldKind::phone(false), &Edit::new("9876", 3, &result.value));
    assert_eq!(result.value, "986");
    assert_eq!(result.cursor_start, 2);
}

#[test]
fn test_insertion_in_middle_moves_digits_across_groups() {
    let result = format_edit(FieldKind::phone(false), &Edit::new("9817-654", 3, "987-654"));
    assert_eq!(result.value, "981-765-4");
    assert_eq!(result.cursor_start, 4);
}

#[test]
fn test_date_edit_and_placeholder() {
    let field = FieldKind::date(DateFormat::MmYy);
    let result = format_edit(field, &Edit::new("120", 3, "12"));
    assert_eq!(result.value, "12/0");
    assert_eq!(result.cursor_start, 4);

    let mask = build_date_mask(&result.value, DateFormat::MmYy);
    assert_eq!(mask.filled(), "12/0");
    assert_eq!(mask.placeholder(), "Y");
}

#[test]
fn test_paste_into_card_field() {
    let mut session = FieldSession::with_value(FieldKind::CreditCard, "4242");
    session.insert("4242 4242 4242");
    assert_eq!(session.value(), "4242 4242 4242 4242");
    assert_eq!(session.cursor(), 19);
}

#[test]
fn test_overwrite_selected_group() {
    let mut session = FieldSession::with_value(FieldKind::CreditCard, test_cards::VISA_2);
    session.select(5, 9);
    session.insert("1111");
    assert_eq!(session.value(), "4242 1111 4242 4242");
    assert_eq!(session.cursor(), 9);
}

#[test]
fn test_delete_selection_across_separator() {
    let mut session = FieldSession::with_value(FieldKind::phone(false), "9876543210");
    session.select(2, 5);
    session.backspace();
    assert_eq!(session.value(), "985-432-10");
    assert_eq!(session.cursor(), 2);
}

#[test]
fn test_host_reports_edits() {
    // A host text field that keeps its own buffer feeds every event through
    let mut session = FieldSession::new(FieldKind::CreditCard);
    session.apply("4", 1, 1);
    session.apply("42", 2, 2);
    session.apply("424", 3, 3);
    session.apply("4242", 4, 4);
    let result = session.apply("42424", 5, 5);
    assert_eq!(result.value, "4242 4");
    assert_eq!(result.cursor_start, 6);
    assert_eq!(result.network, Some(CardNetwork::Visa));
}

// =============================================================================
// EDGE CASES
// =============================================================================

#[test]
fn test_empty_field() {
    let result = format_edit(FieldKind::CreditCard, &Edit::new("", 0, ""));
    assert_eq!(result.value, "");
    assert_eq!(result.cursor_start, 0);
    assert_eq!(result.network, Some(CardNetwork::Placeholder));

    let mask = build_date_mask("", DateFormat::MmDdYy);
    assert_eq!(mask.filled(), "");
    assert_eq!(mask.placeholder(), "MM/DD/YY");
}

#[test]
fn test_offsets_past_end() {
    let result = format_edit(
        FieldKind::CreditCard,
        &Edit::with_selection("4242", 99, 100, "424"),
    );
    assert_eq!(result.value, "4242");
    assert_eq!(result.cursor_start, 4);
    assert_eq!(result.cursor_end, 4);
}

#[test]
fn test_unicode_input() {
    let result = Formatted::from_value(FieldKind::CreditCard, "４２42 € 4242");
    assert_eq!(result.value, "4242 42");
}

#[test]
fn test_overflowing_date_mask() {
    let mask = build_date_mask("1225999", DateFormat::MmYy);
    assert_eq!(mask.filled(), "12/25");
    assert_eq!(mask.placeholder(), "");
    assert!(mask.is_complete());
}

// =============================================================================
// MASKING AND CONFIGURATION
// =============================================================================

#[test]
fn test_hidden_card_display() {
    assert_eq!(
        mask::mask_card_number(test_cards::AMEX_1),
        "•••• •••••• •0005"
    );
    assert_eq!(mask::last_four(test_cards::AMEX_1), "0005");

    let config = FieldConfig::new(FieldKind::CreditCard).hidden(true);
    let session = type_keys(config.kind, test_cards::VISA_1);
    assert_eq!(config.display(session.formatted()), "•••• •••• •••• 1111");
}

#[test]
fn test_field_kind_names() {
    let cases = [
        ("card", FieldKind::CreditCard),
        ("cc", FieldKind::CreditCard),
        ("phone", FieldKind::phone(false)),
        ("PHONE-DOT", FieldKind::phone(true)),
        ("date", FieldKind::date(DateFormat::MmYy)),
        ("date-mm/dd/yyyy", FieldKind::date(DateFormat::MmDdYyyy)),
    ];
    for (name, expected) in cases {
        assert_eq!(name.parse::<FieldKind>().unwrap(), expected, "{}", name);
    }

    for kind in [
        FieldKind::CreditCard,
        FieldKind::phone(true),
        FieldKind::date(DateFormat::MmDdYy),
    ] {
        assert_eq!(kind.to_string().parse::<FieldKind>().unwrap(), kind);
    }
}

#[test]
fn test_unknown_field_kind() {
    let err = "zip".parse::<FieldKind>().unwrap_err();
    assert_eq!(err, FormatError::UnknownFieldKind("zip".to_string()));
    assert!(err.to_string().contains("unknown field kind 'zip'"));

    let err = "date-ddmm".parse::<FieldKind>().unwrap_err();
    assert!(matches!(err, FormatError::UnknownFieldKind(_)));
}

#[cfg(feature = "config")]
#[test]
fn test_config_round_trip_through_json() {
    let json = r#"{ "kind": { "type": "credit-card" }, "hidden": true, "mask_char": "*" }"#;
    let config = FieldConfig::from_json(json).unwrap();
    assert_eq!(config.kind, FieldKind::CreditCard);
    assert_eq!(config.mask_char, '*');

    let formatted = Formatted::from_value(config.kind, test_cards::MC_1);
    assert_eq!(config.display(&formatted), "**** **** **** 4444");

    let err = FieldConfig::from_json(r#"{ "colour": "red" }"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid field configuration in <inline>"));
}

#[cfg(feature = "config")]
#[test]
fn test_formatted_serializes_network_slug() {
    let formatted = Formatted::from_value(FieldKind::CreditCard, "3056");
    let json = serde_json::to_string(&formatted).unwrap();
    assert!(json.contains(r#""network":"diners-club""#), "{}", json);
}
