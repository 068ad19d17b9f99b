//! `application/x-www-form-urlencoded` body for cart posts.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::StorefrontError;
use crate::models::CartLine;

/// Characters left as-is in form values.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
pub const ITEMS_FIELD: &str = "items";

/// Encode the CSRF token and the JSON list of `items`.
pub fn encode_cart_form(csrf_token: &str, items: &[CartLine]) -> Result<String, StorefrontError> {
    let items = serde_json::to_string(items)?;
    Ok(format!(
        "{}={}&{}={}",
        CSRF_FIELD,
        utf8_percent_encode(csrf_token, FORM_VALUE),
        ITEMS_FIELD,
        utf8_percent_encode(&items, FORM_VALUE),
    ))
}
