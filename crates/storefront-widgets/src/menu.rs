//! Off-canvas Mobile Menu
//!
//! Builds the mobile menu from clones of the desktop logo and navigation,
//! makes nested submenus collapsible, and opens/closes the off-canvas panel
//! by toggling a class on `<body>`.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::dom;
use crate::WidgetError;

const WIDGET: &str = "menu";

/// Body class present while the panel is open.
pub const OFFCANVAS_CLASS: &str = "offcanvas-menu";
/// Viewport width above which the panel is never shown.
pub const OFFCANVAS_BREAKPOINT: f64 = 768.0;
const MENU_SELECTOR: &str = ".site-mobile-menu";
/// Submenus are marked after the cloned nav has settled.
const SUBMENU_DELAY_MS: u32 = 1000;

#[component]
fn MobileMenuShell() -> impl IntoView {
    view! {
        <div class="site-mobile-menu-header">
            <div class="site-mobile-menu-logo"></div>
            <div class="site-mobile-menu-close ">
                <span class="ion-ios-close js-menu-toggle"></span>
            </div>
        </div>
        <div class="site-mobile-menu-body"></div>
    }
}

pub fn init() -> Result<(), WidgetError> {
    let built = build();
    bind_toggles()?;
    built
}

/// Id shared by the n-th collapse arrow and the submenu it controls.
pub fn collapse_id(index: usize) -> String {
    format!("collapseItem{}", index)
}

pub fn closes_on_resize(width: f64) -> bool {
    width > OFFCANVAS_BREAKPOINT
}

/// Panel state after a `.js-menu-toggle` click; the clicked toggle's
/// `active` class follows it.
pub fn toggle_open(open: bool) -> bool {
    !open
}

/// Whether a mouseup closes the panel. Clicks inside the panel never do.
pub fn closes_on_mouseup(inside_menu: bool, open: bool) -> bool {
    open && !inside_menu
}

/// `active` state of a collapse arrow after a click, given whether its
/// submenu was shown when the click landed.
pub fn arrow_active(expanded: bool) -> bool {
    !expanded
}

fn build() -> Result<(), WidgetError> {
    let doc = dom::document().ok_or(WidgetError::MissingElement("document"))?;
    let wrap = dom::query_one(".site-wrap").ok_or(WidgetError::MissingElement(".site-wrap"))?;

    let container = doc
        .create_element("div")
        .map_err(WidgetError::js(WIDGET))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WidgetError::MissingElement(MENU_SELECTOR))?;
    container.set_class_name("site-mobile-menu");
    wrap.prepend_with_node_1(&container)
        .map_err(WidgetError::js(WIDGET))?;
    leptos::mount::mount_to(container.clone(), || view! { <MobileMenuShell/> }).forget();

    if let Some(slot) = dom::query_one(".site-mobile-menu-logo") {
        for logo in dom::query_all(".js-logo-clone") {
            let copy = logo.clone_node_with_deep(true).map_err(WidgetError::js(WIDGET))?;
            slot.append_child(&copy).map_err(WidgetError::js(WIDGET))?;
        }
    }

    if let Some(menu_body) = dom::query_one(".site-mobile-menu-body") {
        for nav in dom::query_all(".js-clone-nav") {
            let copy = nav
                .clone_node_with_deep(true)
                .map_err(WidgetError::js(WIDGET))?
                .dyn_into::<Element>()
                .map_err(|_| WidgetError::MissingElement(".js-clone-nav"))?;
            copy.set_class_name("site-nav-wrap");
            menu_body.append_child(&copy).map_err(WidgetError::js(WIDGET))?;
        }
    }

    dom::after(SUBMENU_DELAY_MS, || {
        if let Err(err) = mark_submenus() {
            log::warn!("[menu] submenus left expanded: {}", err);
        }
    });
    Ok(())
}

/// Give each nested list a collapse arrow and a matching id.
fn mark_submenus() -> Result<(), WidgetError> {
    let doc = dom::document().ok_or(WidgetError::MissingElement("document"))?;
    let parents = dom::query_all(".site-mobile-menu .has-children");
    for (index, item) in parents.iter().enumerate() {
        let id = collapse_id(index);
        let arrow = doc.create_element("span").map_err(WidgetError::js(WIDGET))?;
        arrow.set_class_name("arrow-collapse collapsed");
        arrow
            .set_attribute("data-toggle", "collapse")
            .map_err(WidgetError::js(WIDGET))?;
        arrow
            .set_attribute("data-target", &format!("#{}", id))
            .map_err(WidgetError::js(WIDGET))?;
        item.prepend_with_node_1(&arrow).map_err(WidgetError::js(WIDGET))?;

        for list in dom::query_all_in(item, ":scope > ul") {
            list.set_class_name("collapse");
            list.set_id(&id);
        }
    }
    log::debug!("[menu] {} collapsible submenus", parents.len());
    Ok(())
}

fn bind_toggles() -> Result<(), WidgetError> {
    let body: Element = dom::body().ok_or(WidgetError::MissingElement("body"))?.into();

    dom::delegate(&body, "click", ".arrow-collapse", |arrow, ev| {
        let expanded = arrow
            .closest("li")
            .ok()
            .flatten()
            .and_then(|li| li.query_selector(".collapse.show").ok().flatten())
            .is_some();
        set_class(arrow, "active", arrow_active(expanded));
        ev.prevent_default();
    });

    dom::delegate(&body, "click", ".js-menu-toggle", |toggle, ev| {
        ev.prevent_default();
        let open = toggle_open(is_open());
        set_open(open);
        set_class(toggle, "active", open);
    });

    let _ = window_event_listener(leptos::ev::resize, |_| {
        let width = dom::document()
            .and_then(|doc| doc.document_element())
            .map(|root| f64::from(root.client_width()));
        if width.is_some_and(closes_on_resize) && is_open() {
            set_open(false);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(MouseEvent)>::new(|ev: MouseEvent| {
        let inside = dom::event_element(&ev)
            .and_then(|el| el.closest(MENU_SELECTOR).ok().flatten())
            .is_some();
        if closes_on_mouseup(inside, is_open()) {
            set_open(false);
        }
    });
    let doc = dom::document().ok_or(WidgetError::MissingElement("document"))?;
    doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref())
        .map_err(WidgetError::js(WIDGET))?;
    on_mouseup.forget();
    Ok(())
}

fn is_open() -> bool {
    dom::body().is_some_and(|body| dom::has_class(&body, OFFCANVAS_CLASS))
}

fn set_class(element: &Element, class: &str, on: bool) {
    if on {
        dom::add_class(element, class);
    } else {
        dom::remove_class(element, class);
    }
}

fn set_open(open: bool) {
    if let Some(body) = dom::body() {
        set_class(&body, OFFCANVAS_CLASS, open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_ids_count_from_zero() {
        assert_eq!(collapse_id(0), "collapseItem0");
        assert_eq!(collapse_id(12), "collapseItem12");
    }

    #[test]
    fn test_toggle_flips_panel() {
        assert!(toggle_open(false));
        assert!(!toggle_open(true));
        assert!(!toggle_open(toggle_open(false)));
    }

    #[test]
    fn test_mouseup_outside_closes_open_panel() {
        assert!(closes_on_mouseup(false, true));
        assert!(!closes_on_mouseup(true, true));
        assert!(!closes_on_mouseup(false, false));
        assert!(!closes_on_mouseup(true, false));
    }

    #[test]
    fn test_arrow_active_when_submenu_was_collapsed() {
        assert!(arrow_active(false));
        assert!(!arrow_active(true));
    }

    #[test]
    fn test_resize_breakpoint() {
        assert!(!closes_on_resize(320.0));
        assert!(!closes_on_resize(768.0));
        assert!(closes_on_resize(769.0));
        assert!(closes_on_resize(1280.0));
    }
}
