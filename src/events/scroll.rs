//! Scroll-driven effects: navbar chrome, active-section highlighting, and
//! the hero parallax. Each handler owns a `FrameGate`, so a burst of scroll
//! events costs at most one DOM update per repaint.

use crate::constants::{
    NAVBAR_SCROLLED_THRESHOLD_PX, PARALLAX_CUTOFF_MARGIN_PX, PARALLAX_FACTOR,
    SECTION_ACTIVE_TOLERANCE_PX,
};
use crate::core::nav::active_section;
use crate::frame::FrameGate;
use crate::{dom, nav};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scroll_handlers(document: &web::Document, options: &web::AddEventListenerOptions) {
    wire_navbar_chrome(document, options);
    wire_section_highlight(document, options);
    wire_parallax(document, options);
}

fn page_y_offset() -> f64 {
    web::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

/// Condensed navbar chrome past the scroll threshold. Pure threshold, no
/// hysteresis.
fn wire_navbar_chrome(document: &web::Document, options: &web::AddEventListenerOptions) {
    let Some(navbar) = document.get_element_by_id("navbar") else {
        log::warn!("[scroll] missing #navbar, chrome effect not wired");
        return;
    };

    let gate = FrameGate::new(move || {
        if page_y_offset() > NAVBAR_SCROLLED_THRESHOLD_PX {
            let _ = navbar.class_list().add_1("scrolled");
        } else {
            let _ = navbar.class_list().remove_1("scrolled");
        }
    });
    dom::add_scroll_listener(options, move || gate.schedule());
}

/// Reflect the deepest passed section in the nav links. Offsets are sampled
/// inside the redraw so layout changes between events are picked up.
fn wire_section_highlight(document: &web::Document, options: &web::AddEventListenerOptions) {
    let sections = dom::elements_for(document, ".section, .hero");
    let links = dom::elements_for(document, ".nav-link");
    if sections.is_empty() || links.is_empty() {
        log::warn!("[scroll] no sections or nav links, highlighting not wired");
        return;
    }

    let gate = FrameGate::new(move || {
        let tops: Vec<f64> = sections.iter().map(|s| s.offset_top() as f64).collect();
        let current = active_section(&tops, page_y_offset(), SECTION_ACTIVE_TOLERANCE_PX)
            .map(|i| sections[i].id());
        nav::apply_active_link(&links, current.as_deref());
    });
    dom::add_scroll_listener(options, move || gate.schedule());
}

/// Vertical parallax on the hero while it is still on screen; snaps back to
/// zero once the hero has scrolled past the cutoff.
fn wire_parallax(document: &web::Document, options: &web::AddEventListenerOptions) {
    let hero = match document.query_selector(".hero") {
        Ok(Some(el)) => el,
        _ => return,
    };
    let Some(hero) = hero.dyn_ref::<web::HtmlElement>().cloned() else {
        return;
    };

    let gate = FrameGate::new(move || {
        let scrolled = page_y_offset();
        let viewport_h = web::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);

        let transform = if scrolled < viewport_h - PARALLAX_CUTOFF_MARGIN_PX {
            format!("translate3d(0, {}px, 0)", scrolled * PARALLAX_FACTOR)
        } else {
            "translate3d(0, 0, 0)".to_string()
        };
        let _ = hero.style().set_property("transform", &transform);
    });
    dom::add_scroll_listener(options, move || gate.schedule());
}
