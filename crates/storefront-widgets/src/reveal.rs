//! Scroll-reveal animations (AOS).

use serde::Serialize;

use crate::jquery;
use crate::WidgetError;

const WIDGET: &str = "reveal";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealOptions {
    /// Animation length in milliseconds.
    pub duration: u32,
    pub easing: String,
    /// Animate only the first time an element scrolls into view.
    pub once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            duration: 800,
            easing: "slide".to_string(),
            once: true,
        }
    }
}

pub fn init(options: &RevealOptions) -> Result<(), WidgetError> {
    let js_options = jquery::to_js(WIDGET, options)?;
    jquery::aos_init(&js_options).map_err(WidgetError::js(WIDGET))?;
    Ok(())
}
