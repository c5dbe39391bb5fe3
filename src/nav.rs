//! Navigation links: click-to-scroll with the fixed-header offset, and the
//! scroll-driven active marker shared with `events::scroll`.

use crate::constants::NAV_SCROLL_OFFSET_PX;
use crate::{dom, menu};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mark the single link whose fragment matches `current_id`; clear the rest.
/// `None` clears every link. At most one link ends up active.
pub fn apply_active_link(links: &[web::HtmlElement], current_id: Option<&str>) {
    let wanted = current_id.map(|id| format!("#{id}"));
    for link in links {
        let _ = link.class_list().remove_1("active");
        if let (Some(wanted), Some(href)) = (wanted.as_deref(), link.get_attribute("href")) {
            if href == wanted {
                let _ = link.class_list().add_1("active");
            }
        }
    }
}

fn scroll_to_offset(window: &web::Window, top: f64) {
    let options = web::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Each `.nav-link` click claims the active marker, scrolls its target under
/// the fixed header, and closes the mobile menu.
pub fn wire_nav_links(document: &web::Document) {
    let links = dom::elements_for(document, ".nav-link");
    if links.is_empty() {
        log::warn!("[nav] no .nav-link elements found");
        return;
    }

    for link in &links {
        let document = document.clone();
        let links = links.clone();
        let link_in_handler = link.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();

            for other in &links {
                let _ = other.class_list().remove_1("active");
            }
            let _ = link_in_handler.class_list().add_1("active");

            if let Some(href) = link_in_handler.get_attribute("href") {
                if let Ok(Some(target)) = document.query_selector(&href) {
                    if let (Some(window), Some(target)) =
                        (web::window(), target.dyn_ref::<web::HtmlElement>())
                    {
                        let top = target.offset_top() as f64 - NAV_SCROLL_OFFSET_PX;
                        scroll_to_offset(&window, top);
                    }
                }
            }

            menu::close(&document);
        }) as Box<dyn FnMut(_)>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Any same-page anchor scrolls its target into view smoothly.
pub fn wire_anchor_smooth_scroll(document: &web::Document) {
    for anchor in dom::elements_for(document, "a[href^=\"#\"]") {
        let document = document.clone();
        let anchor_in_handler = anchor.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            if let Some(href) = anchor_in_handler.get_attribute("href") {
                if let Ok(Some(target)) = document.query_selector(&href) {
                    let options = web::ScrollIntoViewOptions::new();
                    options.set_behavior(web::ScrollBehavior::Smooth);
                    options.set_block(web::ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
