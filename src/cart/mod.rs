//! Cart
//!
//! Quantity steppers, totals, the header counter and the add/update/remove
//! round-trips to the cart endpoints.

mod client;
mod counter;
mod form;
mod page;
mod stepper;
mod sync;
mod totals;

#[cfg(test)]
mod fake;

pub use client::HttpTransport;
pub use page::{fade_out_row, product_id_from, DomCartPage};
pub use sync::CartController;
