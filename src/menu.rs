use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn close(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("navMenu") {
        let _ = el.class_list().remove_1("active");
    }
    if let Some(el) = document.get_element_by_id("menuToggle") {
        let _ = el.class_list().remove_1("active");
    }
}

/// Hamburger button flips the slide-out menu and its own icon state.
pub fn wire_toggle(document: &web::Document) {
    let (Some(toggle), Some(panel)) = (
        document.get_element_by_id("menuToggle"),
        document.get_element_by_id("navMenu"),
    ) else {
        log::warn!("[menu] missing #menuToggle or #navMenu, menu not wired");
        return;
    };

    let toggle_in_handler = toggle.clone();
    let closure = Closure::wrap(Box::new(move || {
        let _ = panel.class_list().toggle("active");
        let _ = toggle_in_handler.class_list().toggle("active");
    }) as Box<dyn FnMut()>);
    let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
