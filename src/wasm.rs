//! WebAssembly bindings for input formatting.
//!
//! This module exposes the formatter to JavaScript input components. The
//! component stays in charge of its own state: it passes the previous value
//! back in on every `input` event.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { format_input, date_mask } from 'input_mask';
//!
//! await init();
//!
//! input.addEventListener('input', (event) => {
//!     const el = event.target;
//!     const result = format_input('card', el.value, el.selectionStart, el.selectionEnd, previous);
//!     el.value = result.value;
//!     el.setSelectionRange(result.cursor_start, result.cursor_end);
//!     icon.dataset.network = result.network;  // "visa", "amex", ...
//!     previous = result.value;
//! });
//!
//! const [filled, placeholder] = date_mask('120', 'mmyy');  // ["12/0", "Y"]
//! ```

#![cfg(feature = "wasm")]

use crate::edit::{format_edit, Edit};
use crate::{DateFormat, FieldKind};
use wasm_bindgen::prelude::*;

/// Result of formatting an edit, returned to JavaScript.
#[wasm_bindgen]
pub struct FormatResult {
    value: String,
    cursor_start: u32,
    cursor_end: u32,
    network: Option<String>,
}

#[wasm_bindgen]
impl FormatResult {
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.value.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn cursor_start(&self) -> u32 {
        self.cursor_start
    }

    #[wasm_bindgen(getter)]
    pub fn cursor_end(&self) -> u32 {
        self.cursor_end
    }

    /// Network slug (`visa`, `diners-club`, ...), card fields only.
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> Option<String> {
        self.network.clone()
    }
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Reformats a field after an edit.
///
/// `kind` is one of `card`, `phone`, `phone-dot`, `date-mmyy`,
/// `date-mmddyy`, `date-mmddyyyy`.
///
/// # Example
/// ```javascript
/// const r = format_input("phone", "9876", 4, 4, "987");
/// console.log(r.value, r.cursor_start);  // "987-6" 5
/// ```
#[wasm_bindgen]
pub fn format_input(
    kind: &str,
    value: &str,
    selection_start: u32,
    selection_end: u32,
    previous: &str,
) -> Result<FormatResult, JsValue> {
    let kind: FieldKind = kind.parse().map_err(js_error)?;
    let edit = Edit::with_selection(
        value,
        selection_start as usize,
        selection_end as usize,
        previous,
    );
    let formatted = format_edit(kind, &edit);

    Ok(FormatResult {
        cursor_start: u32::try_from(formatted.cursor_start).unwrap_or(u32::MAX),
        cursor_end: u32::try_from(formatted.cursor_end).unwrap_or(u32::MAX),
        network: formatted.network.map(|n| n.slug().to_string()),
        value: formatted.value,
    })
}

/// Classifies a (partial) card number and returns the network slug.
///
/// # Example
/// ```javascript
/// classify_card("4242");  // "visa"
/// classify_card("12");    // "placeholder"
/// ```
#[wasm_bindgen]
pub fn classify_card(card_number: &str) -> String {
    crate::classify(card_number).slug().to_string()
}

/// Formats a complete value for a field kind.
#[wasm_bindgen]
pub fn format_value(kind: &str, value: &str) -> Result<String, JsValue> {
    let kind: FieldKind = kind.parse().map_err(js_error)?;
    Ok(crate::format::format_field(value, kind))
}

/// Strips all formatting, leaving only digits.
#[wasm_bindgen]
pub fn strip_formatting(value: &str) -> String {
    crate::format::strip_formatting(value)
}

/// Builds a date placeholder overlay as `[filled, placeholder]`.
#[wasm_bindgen]
pub fn date_mask(digits: &str, format: &str) -> Result<js_sys::Array, JsValue> {
    let format: DateFormat = format.parse().map_err(js_error)?;
    let (filled, placeholder) = crate::build_date_mask(digits, format).into_parts();

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&filled));
    parts.push(&JsValue::from_str(&placeholder));
    Ok(parts)
}

/// Masks a card number, showing only the last 4 digits.
///
/// # Example
/// ```javascript
/// mask_card("4242424242424242")  // "•••• •••• •••• 4242"
/// ```
#[wasm_bindgen]
pub fn mask_card(card_number: &str) -> String {
    crate::mask::mask_card_number(card_number)
}
