/// Page wiring and scroll-effect constants.
///
/// Element ids, selectors and style values the front-end applies, kept here
/// so the wiring code reads as behaviour rather than string soup.
// Particle canvas
pub const CANVAS_ID: &str = "particles";

// Fade-in on intersection
pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const SECTION_SELECTOR: &str = "section";
pub const FADE_IN_THRESHOLD: f64 = 0.1; // fraction of the element that must be visible
pub const FADE_IN_ROOT_MARGIN: &str = "0px";

// Header scroll effect
pub const HEADER_SELECTOR: &str = ".site-header";
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const HEADER_BG_SCROLLED: &str = "rgba(10, 14, 23, 0.95)";
pub const HEADER_BG_TOP: &str = "rgba(10, 14, 23, 0.8)";
pub const HEADER_SHADOW_SCROLLED: &str = "0 5px 20px rgba(0,0,0,0.5)";
pub const HEADER_SHADOW_TOP: &str = "none";

// In-page anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
