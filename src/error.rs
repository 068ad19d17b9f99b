//! Storefront Errors

use thiserror::Error;

/// Failures in the cart flow. None of these reach the shopper except
/// [`StorefrontError::UnknownStepAction`], which is answered with an alert.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A stepper key whose action part is neither `increase` nor `decrease`.
    #[error("unknown quantity action {0:?}")]
    UnknownStepAction(String),

    /// An element the DOM contract promises is absent.
    #[error("element {0} not found")]
    MissingElement(String),

    #[error("cannot encode cart items: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("cart request failed: {0}")]
    Request(#[from] gloo_net::Error),

    /// The endpoint answered, but not with a cart response.
    #[error("unexpected cart response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
}
