//! Pointer-driven effects: per-card 3D tilt, the cursor trail buffer, and
//! the hover glow transition.

use crate::constants::{
    GLOW_TRANSITION, TILT_LIFT_PX, TILT_PERSPECTIVE_PX, TILT_RELEASE_TRANSITION,
    TILT_TRACK_TRANSITION,
};
use crate::core::tilt::tilt_angles;
use crate::core::trail::CursorTrail;
use crate::dom;
use crate::frame::PointerFrame;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(document: &web::Document) {
    wire_card_tilt(document);
    wire_cursor_trail(document);
    wire_hover_glow(document);
}

/// Tilt each project card toward the pointer. Movement stores the latest
/// client position and reschedules the card's frame (latest wins); the frame
/// reads the live card rect before computing angles. Leaving the card
/// cancels any pending frame and eases back to identity.
fn wire_card_tilt(document: &web::Document) {
    for card in dom::elements_for(document, ".project-card") {
        let latest: Rc<Cell<(f64, f64)>> = Rc::new(Cell::new((0.0, 0.0)));

        let card_in_frame = card.clone();
        let latest_in_frame = latest.clone();
        let frame = PointerFrame::new(move || {
            let rect = card_in_frame.get_bounding_client_rect();
            let (client_x, client_y) = latest_in_frame.get();
            let local = Vec2::new(
                (client_x - rect.left()) as f32,
                (client_y - rect.top()) as f32,
            );
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            let rot = tilt_angles(local, size);

            let style = card_in_frame.style();
            let _ = style.set_property("transition", TILT_TRACK_TRANSITION);
            let _ = style.set_property(
                "transform",
                &format!(
                    "perspective({TILT_PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg) translateY({TILT_LIFT_PX}px)",
                    rot.x, rot.y
                ),
            );
        });

        let frame_on_move = frame.clone();
        let move_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            latest.set((ev.client_x() as f64, ev.client_y() as f64));
            frame_on_move.schedule();
        }) as Box<dyn FnMut(_)>);
        let _ = card
            .add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref());
        move_closure.forget();

        let card_on_leave = card.clone();
        let leave_closure = Closure::wrap(Box::new(move || {
            frame.cancel();
            let style = card_on_leave.style();
            let _ = style.set_property("transition", TILT_RELEASE_TRANSITION);
            let _ = style.set_property(
                "transform",
                &format!("perspective({TILT_PERSPECTIVE_PX}px) rotateX(0) rotateY(0) translateY(0)"),
            );
        }) as Box<dyn FnMut()>);
        let _ = card
            .add_event_listener_with_callback("mouseleave", leave_closure.as_ref().unchecked_ref());
        leave_closure.forget();
    }
}

/// Record recent pointer positions document-wide. The buffer is bounded and
/// currently has no consumer.
fn wire_cursor_trail(document: &web::Document) {
    let trail = Rc::new(RefCell::new(CursorTrail::new()));

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        trail.borrow_mut().push(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            Instant::now(),
        );
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Interactive elements pick up a softer transition the moment the pointer
/// enters, so the CSS hover glow eases instead of snapping.
fn wire_hover_glow(document: &web::Document) {
    for element in dom::elements_for(document, ".btn, .contact-card, .skill-card") {
        let element_in_handler = element.clone();
        let closure = Closure::wrap(Box::new(move || {
            let _ = element_in_handler
                .style()
                .set_property("transition", GLOW_TRANSITION);
        }) as Box<dyn FnMut()>);
        let _ = element
            .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
