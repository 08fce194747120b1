use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::style::set_style;
use crate::viewport::Breakpoints;

/// Smooth-scrolls to the element with id `anchor` (with or without the
/// leading `#`), stopping short of the fixed header. Returns false when the
/// target doesn't exist.
pub fn scroll_to_anchor(anchor: &str, breakpoints: &Breakpoints) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let id = anchor.trim_start_matches('#');
    let Some(target) = window.document().and_then(|document| document.get_element_by_id(id)) else {
        warn!("no scroll target #{}", id);
        return false;
    };

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = breakpoints.scroll_target(target.get_bounding_client_rect().top(), scroll_y);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    debug!("scrolling to #{} at {}", id, top);
    true
}

/// Stops the page behind an open drawer from scrolling.
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window().and_then(|window| window.document()).and_then(|document| document.body())
    else {
        return;
    };
    set_style(&body, "overflow", if locked { "hidden" } else { "" });
}
