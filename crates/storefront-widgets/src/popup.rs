//! Image gallery and video/map popups (Magnific Popup).

use serde::Serialize;

use crate::jquery::{self, JQuery};
use crate::WidgetError;

const WIDGET: &str = "popup";

pub const IMAGE_POPUP_SELECTOR: &str = ".image-popup";
pub const IFRAME_POPUP_SELECTOR: &str = ".popup-youtube, .popup-vimeo, .popup-gmaps";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePopupOptions {
    #[serde(rename = "type")]
    pub kind: String,
    pub close_on_content_click: bool,
    pub close_btn_inside: bool,
    pub fixed_content_pos: bool,
    pub main_class: String,
    pub gallery: GalleryOptions,
    pub image: ImageOptions,
    pub zoom: ZoomOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryOptions {
    pub enabled: bool,
    pub navigate_by_img_click: bool,
    /// Images to preload before and after the current one.
    pub preload: [u32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptions {
    pub vertical_fit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomOptions {
    pub enabled: bool,
    /// Must match the transition duration in the stylesheet.
    pub duration: u32,
}

impl Default for ImagePopupOptions {
    fn default() -> Self {
        Self {
            kind: "image".to_string(),
            close_on_content_click: true,
            close_btn_inside: false,
            fixed_content_pos: true,
            main_class: "mfp-no-margins mfp-with-zoom".to_string(),
            gallery: GalleryOptions {
                enabled: true,
                navigate_by_img_click: true,
                preload: [0, 1],
            },
            image: ImageOptions { vertical_fit: true },
            zoom: ZoomOptions {
                enabled: true,
                duration: 300,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IframePopupOptions {
    pub disable_on: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub main_class: String,
    pub removal_delay: u32,
    pub preloader: bool,
    pub fixed_content_pos: bool,
}

impl Default for IframePopupOptions {
    fn default() -> Self {
        Self {
            disable_on: 700,
            kind: "iframe".to_string(),
            main_class: "mfp-fade".to_string(),
            removal_delay: 160,
            preloader: false,
            fixed_content_pos: false,
        }
    }
}

pub fn init(image: &ImagePopupOptions, iframe: &IframePopupOptions) -> Result<(), WidgetError> {
    let image = jquery::to_js(WIDGET, image)?;
    jquery::apply(WIDGET, IMAGE_POPUP_SELECTOR, &image, JQuery::magnific_popup)?;
    let iframe = jquery::to_js(WIDGET, iframe)?;
    jquery::apply(WIDGET, IFRAME_POPUP_SELECTOR, &iframe, JQuery::magnific_popup)
}

pub fn init_default() -> Result<(), WidgetError> {
    init(&ImagePopupOptions::default(), &IframePopupOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_popup_shape() {
        let value = serde_json::to_value(ImagePopupOptions::default()).unwrap();
        assert_eq!(value["type"], json!("image"));
        assert_eq!(value["closeBtnInside"], json!(false));
        assert_eq!(value["gallery"]["preload"], json!([0, 1]));
        assert_eq!(value["gallery"]["navigateByImgClick"], json!(true));
        assert_eq!(value["image"]["verticalFit"], json!(true));
        assert_eq!(value["zoom"]["duration"], json!(300));
    }

    #[test]
    fn test_iframe_popup_shape() {
        let value = serde_json::to_value(IframePopupOptions::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "disableOn": 700,
                "type": "iframe",
                "mainClass": "mfp-fade",
                "removalDelay": 160,
                "preloader": false,
                "fixedContentPos": false,
            })
        );
    }
}
