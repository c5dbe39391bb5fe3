//! Arrow-key section paging.

use crate::constants::SECTION_IN_VIEW_THRESHOLD_PX;
use crate::core::nav::{section_in_view, step_section, PageStep};
use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Up/Down arrows scroll to the neighboring section, clamped at both ends.
pub fn wire_arrow_paging(document: &web::Document) {
    let sections = dom::elements_for(document, ".section, .hero");
    if sections.is_empty() {
        log::warn!("[keys] no sections found, arrow paging not wired");
        return;
    }

    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let step = match ev.key().as_str() {
            "ArrowDown" => PageStep::Next,
            "ArrowUp" => PageStep::Prev,
            _ => return,
        };
        ev.prevent_default();

        let tops: Vec<f64> = sections
            .iter()
            .map(|s| s.get_bounding_client_rect().top())
            .collect();
        let current = section_in_view(&tops, SECTION_IN_VIEW_THRESHOLD_PX);
        let next = step_section(current, sections.len(), step);

        let options = web::ScrollIntoViewOptions::new();
        options.set_behavior(web::ScrollBehavior::Smooth);
        sections[next].scroll_into_view_with_scroll_into_view_options(&options);
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
