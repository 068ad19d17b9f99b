//! Storefront Page Wiring
//!
//! Binds the cart buttons to the cart controller and starts the page widgets
//! once the DOM is ready.

use std::rc::Rc;

use leptos::prelude::window;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use storefront_widgets::dom;

use crate::cart::{fade_out_row, product_id_from, CartController, DomCartPage, HttpTransport};
use crate::config::PageConfig;
use crate::error::StorefrontError;
use crate::models::CartResponse;

type Controller = CartController<DomCartPage, HttpTransport>;

/// Fade applied to a row before it is posted as removed.
const ROW_FADE_MS: u32 = 400;

/// Run `start` now if the DOM is parsed, otherwise on `DOMContentLoaded`.
pub fn when_ready<F>(start: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = dom::document() else {
        return;
    };
    if doc.ready_state() != "loading" {
        start();
        return;
    }
    let mut pending = Some(start);
    let cb = Closure::<dyn FnMut()>::new(move || {
        if let Some(start) = pending.take() {
            start();
        }
    });
    let _ = doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref());
    cb.forget();
}

pub fn start() {
    let config = PageConfig::from_window();
    let controller = Rc::new(CartController::new(
        DomCartPage,
        HttpTransport::new(config.clone()),
        config.csrf_token.clone(),
    ));

    dom::on_each(".noclick", "click", |_, ev| ev.prevent_default());

    controller.refresh_counter(config.items_in_cart.unwrap_or(0));
    let pathname = window().location().pathname().unwrap_or_default();
    if config.is_cart_page(&pathname) {
        let totals = controller.recompute_totals();
        log::debug!("[cart] {} row(s) on load", totals.subtotals.len());
    }

    bind_cart(&controller);
    storefront_widgets::init_all();
    log::info!("[app] storefront ready on {}", pathname);
}

fn bind_cart(controller: &Rc<Controller>) {
    let cart = Rc::clone(controller);
    dom::on_each(".modifyQty", "click", move |button, ev| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Err(err) = cart.modify_quantity(&button.id()) {
            log::warn!("[cart] {}", err);
        }
    });

    let cart = Rc::clone(controller);
    dom::on_each(".add-to-cart", "click", move |button, _| {
        let cart = Rc::clone(&cart);
        let product_id = product_id_from(&button.id()).to_string();
        spawn_local(async move {
            log_outcome("add", cart.add(&product_id).await);
        });
    });

    let cart = Rc::clone(controller);
    dom::on_each(".update-cart", "click", move |_, _| {
        let cart = Rc::clone(&cart);
        spawn_local(async move {
            log_outcome("update", cart.update(None).await);
        });
    });

    let cart = Rc::clone(controller);
    dom::on_each(".remove-item", "click", move |button, _| {
        let cart = Rc::clone(&cart);
        let product_id = product_id_from(&button.id()).to_string();
        spawn_local(async move {
            fade_out_row(&product_id, ROW_FADE_MS).await;
            log_outcome("remove", cart.remove(&product_id).await);
        });
    });
}

/// Failures only reach the console; the page stays as it was.
fn log_outcome(action: &str, result: Result<CartResponse, StorefrontError>) {
    match result {
        Ok(response) => log::debug!("[cart] {} done, {} in cart", action, response.items_in_cart),
        Err(err) => log::warn!("[cart] {} failed: {}", action, err),
    }
}
