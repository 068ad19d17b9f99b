//! Cart Models
//!
//! Wire shapes exchanged with the cart endpoints.

use serde::{Deserialize, Serialize};

/// One product/quantity pair as posted to the server.
///
/// `quantity` is the raw input value; the server does its own digit check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: String,
}

/// Cart endpoint answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartResponse {
    pub items_in_cart: i64,
    /// `0` when the server rejected the posted items.
    #[serde(default = "default_success")]
    pub success: u8,
}

fn default_success() -> u8 {
    1
}

impl CartResponse {
    pub fn accepted(&self) -> bool {
        self.success != 0
    }
}

/// The two cart mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Add,
    Update,
}

impl CartAction {
    /// Path segment under the cart base URL.
    pub fn segment(self) -> &'static str {
        match self {
            CartAction::Add => "add",
            CartAction::Update => "update",
        }
    }
}
