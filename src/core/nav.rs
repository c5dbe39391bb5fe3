// Section selection logic shared by scroll highlighting and keyboard paging.
// Callers sample element offsets and pass them in; nothing here touches the
// DOM, which keeps the selection rules testable on the host.

/// Index of the section considered active for a given scroll position.
///
/// `tops` are document-order section offsets from the top of the page.
/// A section qualifies once the scroll position has passed `top - tolerance`;
/// the last qualifying section wins, matching a top-down scan. Returns `None`
/// while the scroll position is above every section's activation line.
pub fn active_section(tops: &[f64], scroll_y: f64, tolerance: f64) -> Option<usize> {
    let mut current = None;
    for (i, top) in tops.iter().enumerate() {
        if scroll_y >= top - tolerance {
            current = Some(i);
        }
    }
    current
}

/// Index of the section currently occupying the viewport.
///
/// `viewport_tops` are `getBoundingClientRect().top` values in document
/// order. The last section whose top sits at or above `threshold` is
/// current; before any section reaches it, the first section is.
pub fn section_in_view(viewport_tops: &[f64], threshold: f64) -> usize {
    let mut current = 0;
    for (i, top) in viewport_tops.iter().enumerate() {
        if *top <= threshold {
            current = i;
        }
    }
    current
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageStep {
    Next,
    Prev,
}

/// Neighbor index for keyboard paging, clamped to the section list.
/// Stepping past either end stays put.
pub fn step_section(current: usize, count: usize, step: PageStep) -> usize {
    if count == 0 {
        return 0;
    }
    match step {
        PageStep::Next => (current + 1).min(count - 1),
        PageStep::Prev => current.saturating_sub(1),
    }
}
