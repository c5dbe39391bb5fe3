//! Decorative console output, terminal style, plus the page-load-time
//! probe. Nothing here feeds back into page behavior.

use crate::frame;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// Console %c styles. Every style the module logs with is defined here, so a
// log line can never reference styling that does not exist.
const STYLE_BANNER: &str = "color: #00ff00; font-size: 14px; font-weight: bold; font-family: \"Monaco\", \"Menlo\", monospace; line-height: 1.4;";
const STYLE_GREEN: &str = "color: #00ff00; font-size: 12px; font-family: \"Monaco\", \"Menlo\", monospace;";
const STYLE_CYAN: &str = "color: #00d9ff; font-size: 12px; font-family: \"Monaco\", \"Menlo\", monospace;";
const STYLE_WHITE: &str = "color: #ffffff; font-size: 12px; font-family: \"Monaco\", \"Menlo\", monospace;";
const STYLE_DIM: &str = "color: #6b7280; font-size: 12px; font-family: \"Monaco\", \"Menlo\", monospace;";
const STYLE_SPACER: &str = "font-size: 1px;";

fn styled(text: &str, style: &str) {
    web::console::log_2(
        &JsValue::from_str(&format!("%c{text}")),
        &JsValue::from_str(style),
    );
}

fn styled_2(first: &str, second: &str, style_first: &str, style_second: &str) {
    web::console::log_3(
        &JsValue::from_str(&format!("%c{first}%c{second}")),
        &JsValue::from_str(style_first),
        &JsValue::from_str(style_second),
    );
}

fn spacer() {
    styled("", STYLE_SPACER);
}

const BANNER: &[&str] = &[
    "╔══════════════════════════════════════════════════╗",
    "║                                                  ║",
    "║   ██████╗  ██████╗ ██████╗ ████████╗███████╗     ║",
    "║   ██╔══██╗██╔═══██╗██╔══██╗╚══██╔══╝██╔════╝     ║",
    "║   ██████╔╝██║   ██║██████╔╝   ██║   █████╗       ║",
    "║   ██╔═══╝ ██║   ██║██╔══██╗   ██║   ██╔══╝       ║",
    "║   ██║     ╚██████╔╝██║  ██║   ██║   ██║          ║",
    "║   ╚═╝      ╚═════╝ ╚═╝  ╚═╝   ╚═╝   ╚═╝          ║",
    "║                                                  ║",
    "╚══════════════════════════════════════════════════╝",
];

/// Print the terminal-style banner. Purely cosmetic.
pub fn print_banner() {
    spacer();
    for line in BANNER {
        styled(line, STYLE_BANNER);
    }
    spacer();

    let now = js_sys::Date::new_0();
    styled(
        &format!("Last login: {}", String::from(now.to_string())),
        STYLE_DIM,
    );
    spacer();

    styled_2("guest@portfolio ~ ", "$ whoami", STYLE_GREEN, STYLE_WHITE);
    styled("> AI & Software Developer", STYLE_CYAN);
    spacer();

    styled_2("guest@portfolio ~ ", "$ cat skills.txt", STYLE_GREEN, STYLE_WHITE);
    styled("> Machine Learning & LLMs", STYLE_CYAN);
    styled("> Data Structures & Algorithms", STYLE_CYAN);
    styled("> Full-Stack Development", STYLE_CYAN);
    spacer();

    styled_2("guest@portfolio ~ ", "$ █", STYLE_GREEN, STYLE_WHITE);
    spacer();
    styled("──────────────────────────────────────────────", STYLE_DIM);
    styled("Thanks for inspecting! Feel free to explore the code.", STYLE_WHITE);
    styled("──────────────────────────────────────────────", STYLE_DIM);
    spacer();
}

/// Log how long the page took to load, measured from navigation timing once
/// the load event has settled.
pub fn wire_load_time_probe() {
    let Some(window) = web::window() else {
        return;
    };
    if window.performance().is_none() {
        return;
    }

    let load_closure = Closure::wrap(Box::new(move || {
        frame::after_timeout(0, || {
            let Some(timing) = web::window().and_then(|w| w.performance()).map(|p| p.timing())
            else {
                return;
            };
            let elapsed_ms = timing.load_event_end() - timing.navigation_start();
            styled(&format!("> Page Load Time: {elapsed_ms}ms"), STYLE_CYAN);
        });
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("load", load_closure.as_ref().unchecked_ref());
    load_closure.forget();
}
