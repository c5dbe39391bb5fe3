//! Hero decorations: the subtitle typing effect and the whole-page fade-in.

use crate::constants::{FADE_IN_DELAY_MS, FADE_IN_TRANSITION, TYPING_START_DELAY_MS, TYPING_TICK_MS};
use crate::core::typing::Typewriter;
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Self-rescheduling timeout chain: one character per tick until the source
/// is fully shown, then the chain goes quiet.
fn start_ticking(subtitle: web::HtmlElement, writer: Rc<RefCell<Typewriter>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_in_closure = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(prefix) = writer.borrow_mut().tick() {
            subtitle.set_text_content(Some(&prefix));
            if let Some(window) = web::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    tick_in_closure
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                    TYPING_TICK_MS,
                );
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            TYPING_TICK_MS,
        );
    }
}

/// Capture the subtitle text up front, then on page load clear it and type
/// it back one character at a time. Runs once per page load.
pub fn wire_typing(document: &web::Document) {
    let subtitle = match document.query_selector(".hero-subtitle") {
        Ok(Some(el)) => el,
        _ => return,
    };
    let Some(subtitle) = subtitle.dyn_ref::<web::HtmlElement>().cloned() else {
        return;
    };

    let source = subtitle.text_content().unwrap_or_default();
    let writer = Rc::new(RefCell::new(Typewriter::new(&source)));

    let load_closure = Closure::wrap(Box::new(move || {
        let subtitle = subtitle.clone();
        let writer = writer.clone();
        frame::after_timeout(TYPING_START_DELAY_MS, move || {
            subtitle.set_text_content(Some(""));
            writer.borrow_mut().reset();
            start_ticking(subtitle, writer);
        });
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("load", load_closure.as_ref().unchecked_ref());
    }
    load_closure.forget();
}

/// Fade the page in on load: opacity drops to zero, then eases to one once
/// the transition is enabled.
pub fn wire_fade_in(document: &web::Document) {
    let Some(body) = document.body() else {
        log::warn!("[hero] document has no body, fade-in not wired");
        return;
    };

    let load_closure = Closure::wrap(Box::new(move || {
        let _ = body.style().set_property("opacity", "0");
        let body = body.clone();
        frame::after_timeout(FADE_IN_DELAY_MS, move || {
            let style = body.style();
            let _ = style.set_property("transition", FADE_IN_TRANSITION);
            let _ = style.set_property("opacity", "1");
        });
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("load", load_closure.as_ref().unchecked_ref());
    }
    load_closure.forget();
}
