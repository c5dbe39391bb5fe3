// Host-side tests for the typewriter state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod typing {
    include!("../src/core/typing.rs");
}

use typing::*;

#[test]
fn prefixes_grow_one_character_at_a_time() {
    let mut tw = Typewriter::new("abc");

    assert_eq!(tw.tick().as_deref(), Some("a"));
    assert_eq!(tw.tick().as_deref(), Some("ab"));
    assert_eq!(tw.tick().as_deref(), Some("abc"));
    assert_eq!(tw.tick(), None);
    assert!(tw.is_done());
}

#[test]
fn shown_text_never_exceeds_source() {
    let source = "AI & Software Developer";
    let mut tw = Typewriter::new(source);

    let mut last = String::new();
    while let Some(prefix) = tw.tick() {
        assert!(prefix.len() <= source.len());
        assert!(prefix.len() > last.len());
        last = prefix;
    }
    assert_eq!(last, source);
}

#[test]
fn completes_to_exact_source() {
    let source = "Hello, world";
    let mut tw = Typewriter::new(source);

    let mut final_text = String::new();
    while let Some(prefix) = tw.tick() {
        final_text = prefix;
    }
    assert_eq!(final_text, source);
    assert_eq!(tw.shown_len(), tw.source_len());
}

#[test]
fn multibyte_text_stays_valid_at_every_step() {
    let source = "héllo, 日本語 dev";
    let mut tw = Typewriter::new(source);

    let mut steps = 0;
    while let Some(prefix) = tw.tick() {
        // Each step adds exactly one character, never a fraction of one
        steps += 1;
        assert_eq!(prefix.chars().count(), steps);
        assert!(source.starts_with(&prefix));
    }
    assert_eq!(steps, source.chars().count());
}

#[test]
fn reset_rewinds_to_empty() {
    let mut tw = Typewriter::new("xy");
    let _ = tw.tick();
    let _ = tw.tick();
    assert!(tw.is_done());

    tw.reset();
    assert!(!tw.is_done());
    assert_eq!(tw.shown_len(), 0);
    assert_eq!(tw.tick().as_deref(), Some("x"));
}

#[test]
fn empty_source_is_immediately_done() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_done());
    assert_eq!(tw.tick(), None);
}
