//! Cart Page Access
//!
//! Everything the cart reads from or writes to the page goes through
//! [`CartPage`], so the cart flow can run against an in-memory page in tests.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use storefront_widgets::dom;

use super::counter::CounterView;

pub const QUANTITY_PREFIX: &str = "quantity_";
pub const ROW_PREFIX: &str = "product_";
pub const ROW_SELECTOR: &str = ".cart-item";
pub const COUNTER_ID: &str = "cart_counter";
pub const CART_TOTAL_ID: &str = "total-cart-placeholder";
pub const HIDDEN_CLASS: &str = "invisible";

/// Raw content of one `.cart-item` row.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    /// Position among the rows, used to write the row back.
    pub index: usize,
    pub product_id: String,
    /// `.item-quantity` value. That input carries the `#quantity_<id>` id,
    /// so this is the same value [`CartPage::quantity`] returns.
    pub quantity: String,
    /// `.price-placeholder` content.
    pub unit_price: String,
}

/// Product id at the end of an element id such as `product_12` or `remove_12`.
pub fn product_id_from(element_id: &str) -> &str {
    element_id.rsplit('_').next().unwrap_or(element_id)
}

pub trait CartPage {
    /// Current value of `#quantity_<id>`. Inside the cart table this is the
    /// row's `.item-quantity` input.
    fn quantity(&self, product_id: &str) -> Option<String>;

    fn set_quantity(&self, product_id: &str, value: &str);

    /// Every `.cart-item` row, hidden rows included.
    fn rows(&self) -> Vec<CartRow>;

    fn set_row_subtotal(&self, index: usize, text: &str);

    fn set_cart_total(&self, text: &str);

    fn show_counter(&self, view: &CounterView);

    /// Drop `#product_<id>` from the page.
    fn remove_row(&self, product_id: &str);

    fn alert(&self, message: &str);
}

/// [`CartPage`] over the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomCartPage;

impl DomCartPage {
    fn document(&self) -> Option<Document> {
        dom::document()
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document()?.get_element_by_id(id)
    }

    fn row_elements(&self) -> Vec<Element> {
        dom::query_all(ROW_SELECTOR)
    }
}

impl CartPage for DomCartPage {
    fn quantity(&self, product_id: &str) -> Option<String> {
        let input = self.by_id(&format!("{}{}", QUANTITY_PREFIX, product_id))?;
        dom::input_value(&input)
    }

    fn set_quantity(&self, product_id: &str, value: &str) {
        if let Some(input) = self.by_id(&format!("{}{}", QUANTITY_PREFIX, product_id)) {
            dom::set_input_value(&input, value);
        }
    }

    fn rows(&self) -> Vec<CartRow> {
        self.row_elements()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let quantity = row
                    .query_selector(".item-quantity")
                    .ok()
                    .flatten()
                    .and_then(|input| dom::input_value(&input))
                    .unwrap_or_default();
                let unit_price = row
                    .query_selector(".price-placeholder")
                    .ok()
                    .flatten()
                    .map(|cell| cell.inner_html())
                    .unwrap_or_default();
                CartRow {
                    index,
                    product_id: product_id_from(&row.id()).to_string(),
                    quantity,
                    unit_price,
                }
            })
            .collect()
    }

    fn set_row_subtotal(&self, index: usize, text: &str) {
        let cell = self
            .row_elements()
            .get(index)
            .and_then(|row| row.query_selector(".total-placeholder").ok().flatten());
        if let Some(cell) = cell {
            cell.set_text_content(Some(text));
        }
    }

    fn set_cart_total(&self, text: &str) {
        if let Some(cell) = self.by_id(CART_TOTAL_ID) {
            cell.set_text_content(Some(text));
        }
    }

    fn show_counter(&self, view: &CounterView) {
        let Some(counter) = self.by_id(COUNTER_ID) else {
            return;
        };
        match view {
            CounterView::Hidden => dom::add_class(&counter, HIDDEN_CLASS),
            CounterView::Visible(count) => {
                dom::remove_class(&counter, HIDDEN_CLASS);
                counter.set_text_content(Some(&count.to_string()));
            }
        }
    }

    fn remove_row(&self, product_id: &str) {
        if let Some(row) = self.by_id(&format!("{}{}", ROW_PREFIX, product_id)) {
            row.remove();
        }
    }

    fn alert(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }
}

/// Fade `#product_<id>` to transparent over `millis`, then hide it.
pub async fn fade_out_row(product_id: &str, millis: u32) {
    let row = dom::document()
        .and_then(|doc| doc.get_element_by_id(&format!("{}{}", ROW_PREFIX, product_id)))
        .and_then(|row| row.dyn_into::<HtmlElement>().ok());
    let Some(row) = row else {
        return;
    };
    let style = row.style();
    let _ = style.set_property("transition", &format!("opacity {}ms", millis));
    let _ = style.set_property("opacity", "0");
    gloo_timers::future::TimeoutFuture::new(millis).await;
    let _ = style.set_property("display", "none");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_is_last_segment() {
        assert_eq!(product_id_from("product_12"), "12");
        assert_eq!(product_id_from("remove_item_7"), "7");
        assert_eq!(product_id_from("42"), "42");
    }
}
