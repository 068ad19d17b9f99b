//! Cart Transport
//!
//! Posts an encoded cart form to one of the cart endpoints and decodes the
//! JSON answer.

use gloo_net::http::Request;

use crate::config::PageConfig;
use crate::error::StorefrontError;
use crate::models::{CartAction, CartResponse};

#[allow(async_fn_in_trait)]
pub trait CartTransport {
    async fn submit(&self, action: CartAction, body: String)
        -> Result<CartResponse, StorefrontError>;
}

/// [`CartTransport`] over `fetch`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: PageConfig,
}

impl HttpTransport {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }
}

impl CartTransport for HttpTransport {
    async fn submit(
        &self,
        action: CartAction,
        body: String,
    ) -> Result<CartResponse, StorefrontError> {
        let url = self.config.endpoint(action.segment());
        log::debug!("[cart] POST {}", url);
        let response = Request::post(&url)
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .header("X-Requested-With", "XMLHttpRequest")
            .body(body)?
            .send()
            .await?;
        if !response.ok() {
            return Err(StorefrontError::Status {
                url,
                status: response.status(),
            });
        }
        decode_response(&response.text().await?)
    }
}

/// Parse a cart endpoint body. Transport failures never get this far.
pub fn decode_response(body: &str) -> Result<CartResponse, StorefrontError> {
    serde_json::from_str(body).map_err(StorefrontError::Decode)
}
