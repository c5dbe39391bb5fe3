//! Redraw scheduling against the browser's animation-frame clock.
//!
//! High-frequency inputs (scroll, pointer movement) never mutate the DOM
//! directly; they go through one of the schedulers here so each handler has
//! at most one outstanding redraw. The redraw callback always reads live
//! state when it runs, so dropped events lose nothing.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Coalescing gate: `schedule()` is a no-op while a redraw is pending, and
/// the first call after the redraw runs immediately schedules the next one.
#[derive(Clone)]
pub struct FrameGate {
    pending: Rc<Cell<bool>>,
    redraw: Rc<Closure<dyn FnMut()>>,
}

impl FrameGate {
    pub fn new(mut redraw: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(false));
        let pending_in_frame = pending.clone();
        let redraw = Rc::new(Closure::wrap(Box::new(move || {
            redraw();
            pending_in_frame.set(false);
        }) as Box<dyn FnMut()>));
        Self { pending, redraw }
    }

    pub fn schedule(&self) {
        if self.pending.get() {
            return;
        }
        if let Some(window) = web::window() {
            if window
                .request_animation_frame(self.redraw.as_ref().as_ref().unchecked_ref())
                .is_ok()
            {
                self.pending.set(true);
            }
        }
    }
}

/// Latest-wins scheduler for pointer tracking: a fresh `schedule()` cancels
/// any frame that has not run yet, so the applied update always reflects the
/// newest pointer sample rather than a periodic one.
#[derive(Clone)]
pub struct PointerFrame {
    pending: Rc<Cell<Option<i32>>>,
    redraw: Rc<Closure<dyn FnMut()>>,
}

impl PointerFrame {
    pub fn new(mut redraw: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let pending_in_frame = pending.clone();
        let redraw = Rc::new(Closure::wrap(Box::new(move || {
            pending_in_frame.set(None);
            redraw();
        }) as Box<dyn FnMut()>));
        Self { pending, redraw }
    }

    pub fn schedule(&self) {
        self.cancel();
        if let Some(window) = web::window() {
            if let Ok(id) =
                window.request_animation_frame(self.redraw.as_ref().as_ref().unchecked_ref())
            {
                self.pending.set(Some(id));
            }
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Run `f` once on the next animation frame. Ownership of the closure moves
/// to the JS side when the frame fires.
pub fn next_frame(f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::once_into_js(f);
        let _ = window.request_animation_frame(closure.unchecked_ref());
    }
}

/// Run `f` once after `delay_ms`. The timer is never cancelled, so the
/// closure is always reclaimed when it fires.
pub fn after_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::once_into_js(f);
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref(),
            delay_ms,
        );
    }
}
