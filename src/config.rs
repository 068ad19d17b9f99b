//! Page Configuration
//!
//! Settings the server template leaves on `window` before the script runs.

use serde::Deserialize;
use storefront_widgets::numeric::parse_leading_int;
use wasm_bindgen::JsValue;

pub const DEFAULT_CART_BASE: &str = "/cart/";
pub const DEFAULT_CART_PAGE: &str = "/cart/";

/// Everything the cart needs from the surrounding page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Prefix of the cart endpoints; `add/` and `update/` are appended.
    pub cart_base: String,
    /// Path of the cart page, where totals are computed on load.
    pub cart_page_path: String,
    /// Forwarded as `csrfmiddlewaretoken` on every cart post.
    pub csrf_token: String,
    /// Server-side count rendered into the page; `None` if the page has none.
    pub items_in_cart: Option<i64>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            cart_base: DEFAULT_CART_BASE.to_string(),
            cart_page_path: DEFAULT_CART_PAGE.to_string(),
            csrf_token: String::new(),
            items_in_cart: None,
        }
    }
}

impl PageConfig {
    /// Read `storefront_config`, `csrf_token` and `items_in_cart` from `window`.
    ///
    /// The two loose globals win over the same fields in `storefront_config`.
    pub fn from_window() -> Self {
        let Some(win) = web_sys::window() else {
            return Self::default();
        };
        let global = |name: &str| {
            js_sys::Reflect::get(&win, &JsValue::from_str(name))
                .ok()
                .filter(|value| !value.is_undefined() && !value.is_null())
        };

        let mut config = match global("storefront_config") {
            Some(raw) => serde_wasm_bindgen::from_value(raw).unwrap_or_else(|err| {
                log::warn!("[config] ignoring storefront_config: {}", err);
                Self::default()
            }),
            None => Self::default(),
        };

        match global("csrf_token").and_then(|value| value.as_string()) {
            Some(token) => config.csrf_token = token,
            None if config.csrf_token.is_empty() => {
                log::warn!("[config] no csrf_token on the page; cart posts will be rejected")
            }
            None => {}
        }
        if let Some(value) = global("items_in_cart") {
            match parse_count(value.as_f64(), value.as_string().as_deref()) {
                Some(count) => config.items_in_cart = Some(count),
                None => log::warn!("[config] items_in_cart is not a number: {:?}", value),
            }
        }
        config
    }

    /// Endpoint for one cart mutation, e.g. `/cart/add/`.
    pub fn endpoint(&self, segment: &str) -> String {
        let base = self.cart_base.trim_end_matches('/');
        format!("{}/{}/", base, segment)
    }

    pub fn is_cart_page(&self, pathname: &str) -> bool {
        pathname == self.cart_page_path
    }
}

/// Cart count from a page global rendered either as a number or as text.
pub fn parse_count(number: Option<f64>, text: Option<&str>) -> Option<i64> {
    match (number, text) {
        (Some(n), _) if n.is_finite() => Some(n as i64),
        (_, Some(raw)) => parse_leading_int(raw),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = PageConfig::default();
        assert_eq!(config.endpoint("add"), "/cart/add/");
        assert_eq!(config.endpoint("update"), "/cart/update/");
    }

    #[test]
    fn test_custom_base_without_trailing_slash() {
        let config = PageConfig {
            cart_base: "/shop/cart".to_string(),
            ..PageConfig::default()
        };
        assert_eq!(config.endpoint("add"), "/shop/cart/add/");
    }

    #[test]
    fn test_count_from_number_or_text() {
        assert_eq!(parse_count(Some(3.0), None), Some(3));
        assert_eq!(parse_count(None, Some("3")), Some(3));
        assert_eq!(parse_count(None, Some(" 0")), Some(0));
        assert_eq!(parse_count(None, Some("none")), None);
        assert_eq!(parse_count(Some(f64::NAN), None), None);
        assert_eq!(parse_count(None, None), None);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: PageConfig =
            serde_json::from_str(r#"{"cart_page_path": "/basket/"}"#).unwrap();
        assert_eq!(config.cart_base, DEFAULT_CART_BASE);
        assert!(config.is_cart_page("/basket/"));
        assert!(!config.is_cart_page("/cart/"));
        assert_eq!(config.items_in_cart, None);
    }
}
