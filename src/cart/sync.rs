//! Cart Mutations
//!
//! Add, update and remove flows: read lines from the page, post them, then
//! bring the counter, rows and totals in line with the server's answer.

use crate::error::StorefrontError;
use crate::models::{CartAction, CartLine, CartResponse};

use super::client::CartTransport;
use super::counter::CounterView;
use super::page::{CartPage, QUANTITY_PREFIX};
use super::form::encode_cart_form;
use super::stepper;
use super::totals::{self, CartTotals};

/// Cart behaviour bound to one page and one transport.
pub struct CartController<P, T> {
    page: P,
    transport: T,
    csrf_token: String,
}

impl<P: CartPage, T: CartTransport> CartController<P, T> {
    pub fn new(page: P, transport: T, csrf_token: impl Into<String>) -> Self {
        Self {
            page,
            transport,
            csrf_token: csrf_token.into(),
        }
    }

    #[cfg(test)]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Handle a `.modifyQty` click identified by its element id.
    pub fn modify_quantity(&self, key: &str) -> Result<i64, StorefrontError> {
        stepper::modify_quantity(&self.page, key)
    }

    pub fn recompute_totals(&self) -> CartTotals {
        totals::recompute_totals(&self.page)
    }

    pub fn refresh_counter(&self, count: i64) -> CounterView {
        let view = CounterView::from_count(count);
        self.page.show_counter(&view);
        view
    }

    /// The line for `product_id`, read from its quantity input.
    pub fn line_for(&self, product_id: &str) -> Result<CartLine, StorefrontError> {
        let quantity = self.page.quantity(product_id).ok_or_else(|| {
            StorefrontError::MissingElement(format!("#{}{}", QUANTITY_PREFIX, product_id))
        })?;
        Ok(CartLine {
            product_id: product_id.to_string(),
            quantity,
        })
    }

    /// One line per cart row, hidden rows included. A row without a
    /// quantity input is logged and left out.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.page
            .rows()
            .iter()
            .filter_map(|row| match self.line_for(&row.product_id) {
                Ok(line) => Some(line),
                Err(err) => {
                    log::warn!("[cart] skipping row {}: {}", row.product_id, err);
                    None
                }
            })
            .collect()
    }

    /// Post a single product to the add endpoint.
    pub async fn add(&self, product_id: &str) -> Result<CartResponse, StorefrontError> {
        let line = self.line_for(product_id)?;
        self.send(CartAction::Add, vec![line], None).await
    }

    /// Post every row to the update endpoint. `removed` names a row to drop
    /// from the page once the server has answered.
    pub async fn update(&self, removed: Option<&str>) -> Result<CartResponse, StorefrontError> {
        let lines = self.cart_lines();
        self.send(CartAction::Update, lines, removed).await
    }

    /// Zero the product's quantity and push the cart without it.
    pub async fn remove(&self, product_id: &str) -> Result<CartResponse, StorefrontError> {
        self.page.set_quantity(product_id, "0");
        self.update(Some(product_id)).await
    }

    async fn send(
        &self,
        action: CartAction,
        lines: Vec<CartLine>,
        removed: Option<&str>,
    ) -> Result<CartResponse, StorefrontError> {
        log::debug!("[cart] {} {} line(s)", action.segment(), lines.len());
        let body = encode_cart_form(&self.csrf_token, &lines)?;
        let response = self.transport.submit(action, body).await?;
        self.apply(action, &response, removed);
        Ok(response)
    }

    /// Reflect a server answer on the page.
    pub fn apply(&self, action: CartAction, response: &CartResponse, removed: Option<&str>) {
        if !response.accepted() {
            log::warn!("[cart] server rejected the {} request", action.segment());
        }
        self.refresh_counter(response.items_in_cart);
        if action == CartAction::Update {
            if let Some(product_id) = removed {
                self.page.remove_row(product_id);
            }
            self.recompute_totals();
        }
    }
}
