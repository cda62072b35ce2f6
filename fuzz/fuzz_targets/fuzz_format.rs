//! Fuzz target for one-shot formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use input_mask::{build_date_mask, classify, format, mask, CardNetwork, DateFormat, FieldKind};

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = classify(data);
    let _ = format::strip_formatting(data);
    let _ = format::format_card_number(data);
    let _ = format::split_into_groups(data, &[4, 6, 5]);
    let _ = mask::mask_card_number(data);
    let _ = mask::last_four(data);

    for network in CardNetwork::ALL {
        let _ = format::format_card_for_network(data, network);
    }

    for format in [DateFormat::MmYy, DateFormat::MmDdYy, DateFormat::MmDdYyyy] {
        let mask = build_date_mask(data, format);
        assert_eq!(mask.to_string().len(), format.template().len());
    }

    // Formatting keeps a prefix of the digits and is idempotent
    for kind in [FieldKind::CreditCard, FieldKind::phone(false), FieldKind::date(DateFormat::MmYy)] {
        let formatted = format::format_field(data, kind);
        let digits = format::strip_formatting(data);
        assert!(digits.starts_with(&format::strip_formatting(&formatted)));
        assert_eq!(format::format_field(&formatted, kind), formatted);
    }
});
