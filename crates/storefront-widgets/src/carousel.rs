//! Product carousel (Owl Carousel).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::jquery::{self, JQuery};
use crate::WidgetError;

const WIDGET: &str = "carousel";

pub const CAROUSEL_SELECTOR: &str = ".nonloop-block-3";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
    pub center: bool,
    pub items: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub stage_padding: u32,
    pub margin: u32,
    pub nav: bool,
    pub nav_text: [String; 2],
    /// Keyed by minimum viewport width in pixels.
    pub responsive: BTreeMap<String, Breakpoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakpoint {
    pub margin: u32,
    pub items: u32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        let responsive = [(600, 2), (1000, 3), (1200, 3)]
            .into_iter()
            .map(|(width, items)| (width.to_string(), Breakpoint { margin: 20, items }))
            .collect();
        Self {
            center: false,
            items: 1,
            looped: false,
            stage_padding: 15,
            margin: 20,
            nav: true,
            nav_text: [
                r#"<span class="icon-arrow_back"></span>"#.to_string(),
                r#"<span class="icon-arrow_forward"></span>"#.to_string(),
            ],
            responsive,
        }
    }
}

pub fn init(options: &CarouselOptions) -> Result<(), WidgetError> {
    let js_options = jquery::to_js(WIDGET, options)?;
    jquery::apply(WIDGET, CAROUSEL_SELECTOR, &js_options, JQuery::owl_carousel)
}
