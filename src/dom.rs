use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Collect every element matching `selector`, skipping non-HTML nodes.
pub fn elements_for(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// Probe whether the runtime reads the `passive` listener option.
///
/// Registers a throwaway listener whose options object exposes `passive`
/// through a getter; the getter firing during registration means the hint is
/// honored. Every JS call in the probe is fallible and any failure counts as
/// "not supported".
pub fn detect_passive_support() -> bool {
    let observed = Rc::new(Cell::new(false));

    let observed_in_getter = observed.clone();
    let getter = Closure::wrap(Box::new(move || -> JsValue {
        observed_in_getter.set(true);
        JsValue::FALSE
    }) as Box<dyn FnMut() -> JsValue>);

    let descriptor = js_sys::Object::new();
    if js_sys::Reflect::set(&descriptor, &JsValue::from_str("get"), getter.as_ref()).is_err() {
        return false;
    }
    let options = js_sys::Object::new();
    js_sys::Object::define_property(&options, &JsValue::from_str("passive"), &descriptor);

    let noop = js_sys::Function::new_no_args("");
    if let Some(window) = web::window() {
        let target: &web::EventTarget = window.as_ref();
        let options: web::AddEventListenerOptions = options.unchecked_into();
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            "test", &noop, &options,
        );
        let _ = target.remove_event_listener_with_callback("test", &noop);
    }

    observed.get()
}

/// Listener options shared by all scroll handlers: the passive hint when the
/// probe says it is honored, plain defaults otherwise.
pub fn scroll_listener_options(passive_supported: bool) -> web::AddEventListenerOptions {
    let options = web::AddEventListenerOptions::new();
    if passive_supported {
        options.set_passive(true);
    }
    options
}

/// Attach a scroll listener to the window with the shared options value.
pub fn add_scroll_listener(options: &web::AddEventListenerOptions, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            options,
        );
        closure.forget();
    }
}
