//! Scroll-driven page effects that sit alongside the particle canvas.
pub mod anchors;
pub mod fade_in;
pub mod header;

pub use anchors::wire_smooth_anchors;
pub use fade_in::wire_fade_in;
pub use header::wire_header_scroll;
