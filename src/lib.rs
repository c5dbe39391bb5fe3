#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod banner;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod hero;
mod menu;
mod nav;
mod reveal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let passive = dom::detect_passive_support();
    log::info!("[init] passive scroll listeners supported={}", passive);
    let scroll_options = dom::scroll_listener_options(passive);

    nav::wire_nav_links(&document);
    nav::wire_anchor_smooth_scroll(&document);
    menu::wire_toggle(&document);

    events::wire_scroll_handlers(&document, &scroll_options);
    events::wire_pointer_handlers(&document);
    events::wire_arrow_paging(&document);

    reveal::wire_reveal(&document)?;

    hero::wire_typing(&document);
    hero::wire_fade_in(&document);

    banner::print_banner();
    banner::wire_load_time_probe();

    Ok(())
}
