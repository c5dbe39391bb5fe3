// Host-side tests for pure section-selection logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod nav {
    include!("../src/core/nav.rs");
}

use nav::*;

#[test]
fn active_section_none_above_first_activation_line() {
    let tops = vec![500.0, 1200.0, 2000.0];

    // Scroll position well above the first section's activation line
    assert_eq!(active_section(&tops, 0.0, 100.0), None);
    assert_eq!(active_section(&tops, 399.9, 100.0), None);
}

#[test]
fn active_section_boundary_is_inclusive() {
    let tops = vec![500.0, 1200.0];

    // scroll_y == top - tolerance activates the section
    assert_eq!(active_section(&tops, 400.0, 100.0), Some(0));
    assert_eq!(active_section(&tops, 1100.0, 100.0), Some(1));
}

#[test]
fn active_section_last_qualifying_wins() {
    let tops = vec![0.0, 600.0, 1400.0];

    assert_eq!(active_section(&tops, 0.0, 100.0), Some(0));
    assert_eq!(active_section(&tops, 700.0, 100.0), Some(1));
    // Deep scroll qualifies every section; the last one in document order wins
    assert_eq!(active_section(&tops, 5000.0, 100.0), Some(2));
}

#[test]
fn active_section_handles_unsorted_offsets() {
    // Document order is authoritative even if offsets are not monotonic
    // (e.g. absolutely positioned sections)
    let tops = vec![800.0, 200.0];

    // Only the second qualifies
    assert_eq!(active_section(&tops, 300.0, 100.0), Some(1));
    // Both qualify; last in document order wins
    assert_eq!(active_section(&tops, 900.0, 100.0), Some(1));
}

#[test]
fn active_section_empty_list() {
    assert_eq!(active_section(&[], 1000.0, 100.0), None);
}

#[test]
fn section_in_view_defaults_to_first() {
    // All sections still below the threshold line
    let tops = vec![300.0, 900.0, 1500.0];
    assert_eq!(section_in_view(&tops, 100.0), 0);
}

#[test]
fn section_in_view_picks_last_at_or_above_threshold() {
    // First two sections have scrolled past the threshold line
    let tops = vec![-600.0, 50.0, 700.0];
    assert_eq!(section_in_view(&tops, 100.0), 1);

    let tops = vec![-1200.0, -600.0, 80.0];
    assert_eq!(section_in_view(&tops, 100.0), 2);
}

#[test]
fn section_in_view_threshold_is_inclusive() {
    let tops = vec![100.0, 500.0];
    assert_eq!(section_in_view(&tops, 100.0), 0);
}

#[test]
fn step_section_clamps_at_both_ends() {
    // Down at the last section stays on the last
    assert_eq!(step_section(2, 3, PageStep::Next), 2);
    // Up at the first section stays on the first
    assert_eq!(step_section(0, 3, PageStep::Prev), 0);
}

#[test]
fn step_section_moves_between_neighbors() {
    assert_eq!(step_section(0, 3, PageStep::Next), 1);
    assert_eq!(step_section(1, 3, PageStep::Next), 2);
    assert_eq!(step_section(2, 3, PageStep::Prev), 1);
    assert_eq!(step_section(1, 3, PageStep::Prev), 0);
}

#[test]
fn step_section_empty_list_is_inert() {
    assert_eq!(step_section(0, 0, PageStep::Next), 0);
    assert_eq!(step_section(0, 0, PageStep::Prev), 0);
}
