//! In-memory cart page for tests.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::counter::CounterView;
use super::page::{CartPage, CartRow};

/// One `.cart-item`. Its `.item-quantity` input is the `#quantity_<id>`
/// element, so the row owns the value and both lookups read it.
#[derive(Debug, Clone)]
struct FakeRow {
    product_id: String,
    quantity: Option<String>,
    unit_price: String,
    subtotal: Option<String>,
}

#[derive(Debug, Default)]
struct State {
    rows: Vec<FakeRow>,
    /// `#quantity_<id>` inputs outside the cart table.
    quantities: BTreeMap<String, String>,
    cart_total: Option<String>,
    counter: Option<CounterView>,
    alerts: Vec<String>,
}

#[derive(Debug, Default)]
pub struct FakePage {
    state: RefCell<State>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `.cart-item` row with its own quantity input.
    pub fn with_row(self, product_id: &str, quantity: &str, unit_price: &str) -> Self {
        self.push_row(product_id, Some(quantity), unit_price)
    }

    /// A `.cart-item` row whose quantity input is missing from the markup.
    pub fn with_row_without_input(self, product_id: &str, unit_price: &str) -> Self {
        self.push_row(product_id, None, unit_price)
    }

    fn push_row(self, product_id: &str, quantity: Option<&str>, unit_price: &str) -> Self {
        self.state.borrow_mut().rows.push(FakeRow {
            product_id: product_id.to_string(),
            quantity: quantity.map(str::to_string),
            unit_price: unit_price.to_string(),
            subtotal: None,
        });
        self
    }

    /// A quantity input with no cart row, as on a product page.
    pub fn with_input(self, product_id: &str, quantity: &str) -> Self {
        self.state
            .borrow_mut()
            .quantities
            .insert(product_id.to_string(), quantity.to_string());
        self
    }

    pub fn row_ids(&self) -> Vec<String> {
        self.state
            .borrow()
            .rows
            .iter()
            .map(|row| row.product_id.clone())
            .collect()
    }

    pub fn subtotal(&self, index: usize) -> Option<String> {
        self.state.borrow().rows.get(index)?.subtotal.clone()
    }

    pub fn cart_total(&self) -> Option<String> {
        self.state.borrow().cart_total.clone()
    }

    pub fn counter(&self) -> Option<CounterView> {
        self.state.borrow().counter
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state.borrow().alerts.clone()
    }
}

impl CartPage for FakePage {
    fn quantity(&self, product_id: &str) -> Option<String> {
        let state = self.state.borrow();
        match state.rows.iter().find(|row| row.product_id == product_id) {
            Some(row) => row.quantity.clone(),
            None => state.quantities.get(product_id).cloned(),
        }
    }

    fn set_quantity(&self, product_id: &str, value: &str) {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        let slot = match state.rows.iter_mut().find(|row| row.product_id == product_id) {
            Some(row) => row.quantity.as_mut(),
            None => state.quantities.get_mut(product_id),
        };
        if let Some(slot) = slot {
            *slot = value.to_string();
        }
    }

    fn rows(&self) -> Vec<CartRow> {
        let state = self.state.borrow();
        state
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| CartRow {
                index,
                product_id: row.product_id.clone(),
                quantity: row.quantity.clone().unwrap_or_default(),
                unit_price: row.unit_price.clone(),
            })
            .collect()
    }

    fn set_row_subtotal(&self, index: usize, text: &str) {
        if let Some(row) = self.state.borrow_mut().rows.get_mut(index) {
            row.subtotal = Some(text.to_string());
        }
    }

    fn set_cart_total(&self, text: &str) {
        self.state.borrow_mut().cart_total = Some(text.to_string());
    }

    fn show_counter(&self, view: &CounterView) {
        self.state.borrow_mut().counter = Some(*view);
    }

    fn remove_row(&self, product_id: &str) {
        self.state
            .borrow_mut()
            .rows
            .retain(|row| row.product_id != product_id);
    }

    fn alert(&self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_string());
    }
}
