//! DOM Helpers
//!
//! Thin selector and listener utilities over `web_sys`, shared by the
//! widgets and the cart.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|doc| doc.body())
}

/// First element matching `selector` in the document.
pub fn query_one(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector` in the document, in tree order.
pub fn query_all(selector: &str) -> Vec<Element> {
    match document() {
        Some(doc) => elements(doc.query_selector_all(selector)),
        None => Vec::new(),
    }
}

/// All elements matching `selector` below `root`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector))
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Value of an `<input>`; `None` for any other element.
pub fn input_value(element: &Element) -> Option<String> {
    element
        .dyn_ref::<HtmlInputElement>()
        .map(|input| input.value())
}

pub fn set_input_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }
}

/// Element an event was dispatched on, if it is an element.
pub fn event_element(ev: &Event) -> Option<Element> {
    ev.target().and_then(|target| target.dyn_into::<Element>().ok())
}

/// Bind `handler` directly on every element currently matching `selector`.
///
/// The handler receives the element it was bound to, like `this` in a jQuery
/// handler. Listeners live for the whole page.
pub fn on_each<F>(selector: &str, event: &str, handler: F)
where
    F: Fn(&Element, &Event) + Clone + 'static,
{
    for element in query_all(selector) {
        let handler = handler.clone();
        let bound = element.clone();
        let cb = Closure::<dyn FnMut(Event)>::new(move |ev: Event| handler(&bound, &ev));
        if let Err(err) =
            element.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        {
            log::warn!("[dom] cannot bind {} on {}: {}", event, selector, describe(&err));
        }
        cb.forget();
    }
}

/// Listen on `root` for events whose target sits inside an element matching
/// `selector`, including elements added later.
pub fn delegate<F>(root: &Element, event: &str, selector: &'static str, handler: F)
where
    F: Fn(&Element, &Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let matched = event_element(&ev).and_then(|el| el.closest(selector).ok().flatten());
        if let Some(el) = matched {
            handler(&el, &ev);
        }
    });
    if let Err(err) = root.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("[dom] cannot delegate {} for {}: {}", event, selector, describe(&err));
    }
    cb.forget();
}

/// Run `f` once after `millis`.
pub fn after<F>(millis: u32, f: F)
where
    F: FnOnce() + 'static,
{
    gloo_timers::callback::Timeout::new(millis, f).forget();
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Best-effort message out of a thrown JS value.
pub fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
