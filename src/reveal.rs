//! Reveal-on-view: fade-in elements become visible the first time they
//! cross into the viewport, and skill cards animate their progress bar.

use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SKILL_BAR_DELAY_MS};
use crate::frame;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Widen the skill card's progress bar to the target stored in its inline
/// `--progress-width` custom property, after a short settle delay.
fn animate_skill_bar(card: &web::Element) {
    let bar = match card.query_selector(".skill-progress-bar") {
        Ok(Some(el)) => el,
        _ => return,
    };
    let Some(bar) = bar.dyn_ref::<web::HtmlElement>().cloned() else {
        return;
    };
    frame::after_timeout(SKILL_BAR_DELAY_MS, move || {
        let style = bar.style();
        if let Ok(width) = style.get_property_value("--progress-width") {
            let _ = style.set_property("width", &width);
        }
    });
}

fn reveal(entry: &web::IntersectionObserverEntry) {
    let target = entry.target();
    frame::next_frame(move || {
        let _ = target.class_list().add_1("visible");
        if target.class_list().contains("skill-card") {
            animate_skill_bar(&target);
        }
    });
}

/// Observe every `.fade-in` element. Elements stay observed after reveal;
/// repeat notifications re-add a class that is already present.
pub fn wire_reveal(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    reveal(&entry);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    )
    .map_err(|e| anyhow::anyhow!("intersection observer: {:?}", e))?;
    callback.forget();

    for element in crate::dom::elements_for(document, ".fade-in") {
        observer.observe(&element);
    }

    Ok(())
}
