//! jQuery plugin bindings
//!
//! Every import is `catch`, so a page without the library (or the plugin)
//! surfaces as an `Err` instead of a trap.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::WidgetError;

#[wasm_bindgen]
extern "C" {
    /// A jQuery selection.
    pub type JQuery;

    #[wasm_bindgen(catch, js_name = jQuery)]
    fn select(selector: &str) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method, catch, js_name = owlCarousel)]
    pub fn owl_carousel(this: &JQuery, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = magnificPopup)]
    pub fn magnific_popup(this: &JQuery, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn slider(this: &JQuery, options: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    pub fn aos_init(options: &JsValue) -> Result<JsValue, JsValue>;
}

type PluginCall = fn(&JQuery, &JsValue) -> Result<JsValue, JsValue>;

/// Run `plugin` on the selection for `selector`.
pub(crate) fn apply(
    widget: &'static str,
    selector: &str,
    options: &JsValue,
    plugin: PluginCall,
) -> Result<(), WidgetError> {
    let selection = select(selector).map_err(WidgetError::js(widget))?;
    plugin(&selection, options).map_err(WidgetError::js(widget))?;
    Ok(())
}

/// Plain-object conversion for plugin options (maps become objects).
pub(crate) fn to_js<T: Serialize>(widget: &'static str, options: &T) -> Result<JsValue, WidgetError> {
    options
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| WidgetError::Options {
            widget,
            message: err.to_string(),
        })
}
