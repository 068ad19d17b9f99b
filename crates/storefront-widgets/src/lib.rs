//! Storefront Widgets
//!
//! One-shot setup for the page widgets that sit next to the cart: carousel,
//! off-canvas mobile menu, plus/minus steppers, price-range slider, popups
//! and scroll-reveal. Each widget is independent; a missing library only
//! skips that widget.

pub mod carousel;
pub mod dom;
mod error;
mod jquery;
pub mod menu;
pub mod numeric;
pub mod plus_minus;
pub mod popup;
pub mod reveal;
pub mod slider;

pub use error::WidgetError;

use carousel::CarouselOptions;
use slider::PriceRangeOptions;

/// Initialize every widget with its stock configuration.
///
/// Scroll-reveal is not included: it is started at script load, before the
/// DOM is ready, by [`reveal::init`].
pub fn init_all() {
    report("carousel", carousel::init(&CarouselOptions::default()));
    report("menu", menu::init());
    plus_minus::bind();
    report("slider", slider::init(&PriceRangeOptions::default()));
    report("popup", popup::init_default());
}

/// Log the outcome of a widget setup.
pub fn report(widget: &str, result: Result<(), WidgetError>) {
    match result {
        Ok(()) => log::debug!("[widgets] {} ready", widget),
        Err(err) => log::warn!("[widgets] {} skipped: {}", widget, err),
    }
}
