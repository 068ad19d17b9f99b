//! Price range slider (jQuery UI).

use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::dom;
use crate::jquery::{self, JQuery};
use crate::WidgetError;

const WIDGET: &str = "slider";

pub const SLIDER_SELECTOR: &str = "#slider-range";
pub const AMOUNT_SELECTOR: &str = "#amount";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRangeOptions {
    pub range: bool,
    pub min: u32,
    pub max: u32,
    /// Initial low and high handles.
    pub values: [u32; 2],
}

impl Default for PriceRangeOptions {
    fn default() -> Self {
        Self {
            range: true,
            min: 0,
            max: 500,
            values: [75, 300],
        }
    }
}

/// Text shown in the amount field, e.g. `$75 - $300`.
pub fn format_price_range(low: f64, high: f64) -> String {
    format!("${} - ${}", low, high)
}

pub fn init(options: &PriceRangeOptions) -> Result<(), WidgetError> {
    let js_options = jquery::to_js(WIDGET, options)?;

    let on_slide = Closure::<dyn FnMut(JsValue, JsValue)>::new(|_event: JsValue, ui: JsValue| {
        if let Some((low, high)) = handle_values(&ui) {
            show_amount(&format_price_range(low, high));
        }
    });
    js_sys::Reflect::set(&js_options, &JsValue::from_str("slide"), on_slide.as_ref())
        .map_err(WidgetError::js(WIDGET))?;
    on_slide.forget();

    jquery::apply(WIDGET, SLIDER_SELECTOR, &js_options, JQuery::slider)?;

    let [low, high] = options.values;
    show_amount(&format_price_range(low.into(), high.into()));
    Ok(())
}

/// Both handle positions out of the `ui` argument of a slide event.
fn handle_values(ui: &JsValue) -> Option<(f64, f64)> {
    let values = js_sys::Reflect::get(ui, &JsValue::from_str("values")).ok()?;
    let values = values.dyn_into::<js_sys::Array>().ok()?;
    Some((values.get(0).as_f64()?, values.get(1).as_f64()?))
}

fn show_amount(text: &str) {
    if let Some(field) = dom::query_one(AMOUNT_SELECTOR) {
        dom::set_input_value(&field, text);
    }
}
