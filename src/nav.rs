use crate::constants::*;

/// Inline style pair applied to the site header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

/// Header look for a given vertical scroll offset (CSS px).
#[inline]
pub fn header_style(scroll_y: f64) -> HeaderStyle {
    if scroll_y > HEADER_SCROLL_THRESHOLD_PX {
        HeaderStyle {
            background: HEADER_BG_SCROLLED,
            box_shadow: HEADER_SHADOW_SCROLLED,
        }
    } else {
        HeaderStyle {
            background: HEADER_BG_TOP,
            box_shadow: HEADER_SHADOW_TOP,
        }
    }
}

/// Selector to scroll to for an in-page link, or `None` for a bare `#`
/// (or anything that is not a fragment link).
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}
