//! Quantity Stepper
//!
//! `.modifyQty` buttons carry ids like `increase_12` / `decrease_12`; the
//! first segment is the action, the second the product whose
//! `#quantity_<id>` input is stepped.

use std::str::FromStr;

use storefront_widgets::numeric::parse_leading_int;
use storefront_widgets::plus_minus::{decrement, increment};

use crate::error::StorefrontError;

use super::page::CartPage;

/// Alert text for a stepper button with an unknown action.
pub const QUANTITY_ERROR_MESSAGE: &str = "Quantity modification error!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Increase,
    Decrease,
}

impl FromStr for StepAction {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increase" => Ok(StepAction::Increase),
            "decrease" => Ok(StepAction::Decrease),
            other => Err(StorefrontError::UnknownStepAction(other.to_string())),
        }
    }
}

impl StepAction {
    pub fn apply(self, current: i64) -> i64 {
        match self {
            StepAction::Increase => increment(current),
            StepAction::Decrease => decrement(current),
        }
    }
}

/// Split a stepper key into its action and product id.
pub fn parse_step_key(key: &str) -> Result<(StepAction, &str), StorefrontError> {
    let mut parts = key.split('_');
    let action = parts.next().unwrap_or_default().parse()?;
    Ok((action, parts.next().unwrap_or_default()))
}

/// Step the input named by `key` and return its new value.
///
/// An unknown action alerts once and leaves every input untouched.
pub fn modify_quantity<P: CartPage>(page: &P, key: &str) -> Result<i64, StorefrontError> {
    let (action, product_id) = match parse_step_key(key) {
        Ok(parsed) => parsed,
        Err(err) => {
            page.alert(QUANTITY_ERROR_MESSAGE);
            return Err(err);
        }
    };
    let raw = page
        .quantity(product_id)
        .ok_or_else(|| StorefrontError::MissingElement(format!("#quantity_{}", product_id)))?;
    let next = action.apply(parse_leading_int(&raw).unwrap_or(0));
    page.set_quantity(product_id, &next.to_string());
    Ok(next)
}
