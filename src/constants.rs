/// Scroll, animation, and timing constants for the page behavior layer.
///
/// These constants express intended behavior (thresholds, delays, easing)
/// and keep magic numbers out of the handlers.
// Fixed-header offset applied when scrolling to a nav target (px)
pub const NAV_SCROLL_OFFSET_PX: f64 = 70.0;

// Scroll distance past which the navbar picks up its condensed chrome (px)
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 50.0;

// Look-ahead tolerance when deciding the active section on scroll (px)
pub const SECTION_ACTIVE_TOLERANCE_PX: f64 = 100.0;

// Viewport-top threshold for the keyboard-paging notion of "current" (px)
pub const SECTION_IN_VIEW_THRESHOLD_PX: f64 = 100.0;

// Reveal-on-view observer configuration
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element visible
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SKILL_BAR_DELAY_MS: i32 = 200; // progress bar starts after reveal

// Hero typing effect
pub const TYPING_START_DELAY_MS: i32 = 1200;
pub const TYPING_TICK_MS: i32 = 60;

// Page fade-in
pub const FADE_IN_DELAY_MS: i32 = 100;
pub const FADE_IN_TRANSITION: &str = "opacity 0.5s ease-in-out";

// Card tilt presentation
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_LIFT_PX: f32 = -12.0; // vertical lift while tilted
pub const TILT_TRACK_TRANSITION: &str = "transform 0.1s ease-out";
pub const TILT_RELEASE_TRANSITION: &str = "transform 0.6s cubic-bezier(0.16, 1, 0.3, 1)";

// Hover glow transition for interactive elements
pub const GLOW_TRANSITION: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";

// Hero parallax
pub const PARALLAX_FACTOR: f64 = 0.25; // fraction of the scroll offset
pub const PARALLAX_CUTOFF_MARGIN_PX: f64 = 100.0; // below innerHeight
