//! Storefront Page Script Entry Point

mod app;
mod cart;
mod config;
mod error;
mod models;

use storefront_widgets::reveal::{self, RevealOptions};

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // Scroll-reveal goes first so above-the-fold elements animate on load.
    storefront_widgets::report("reveal", reveal::init(&RevealOptions::default()));
    app::when_ready(app::start);
}
