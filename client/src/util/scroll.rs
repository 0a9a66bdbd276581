//! Window scroll offset and smooth in-page navigation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::content::Section;

/// Vertical offset at which the header switches to its scrolled style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_past_threshold(offset: f64) -> bool {
    offset >= SCROLL_THRESHOLD
}

/// Current vertical scroll offset of the window, `0.0` off-browser.
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the viewport to the anchor for `section`.
///
/// Returns `false` when the anchor element is missing or there is no
/// browser window; nothing moves in that case.
pub fn scroll_to_section(section: Section) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(section.id()))
        else {
            log::debug!("no anchor for section {}", section.id());
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
        false
    }
}
