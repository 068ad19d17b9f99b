use thiserror::Error;

/// Errors raised while setting up a page widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The JS side threw, usually because the library is not loaded.
    #[error("{widget}: {message}")]
    Js {
        widget: &'static str,
        message: String,
    },

    /// The option struct could not be turned into a JS object.
    #[error("{widget}: invalid options: {message}")]
    Options {
        widget: &'static str,
        message: String,
    },

    /// A node the widget hangs off is absent from the page.
    #[error("{0} not found in the page")]
    MissingElement(&'static str),
}

impl WidgetError {
    pub(crate) fn js(widget: &'static str) -> impl Fn(wasm_bindgen::JsValue) -> Self {
        move |err| WidgetError::Js {
            widget,
            message: crate::dom::describe(&err),
        }
    }
}
