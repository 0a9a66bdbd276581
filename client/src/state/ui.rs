//! Page chrome state: theme, mobile menu, and scroll flags.
//!
//! DESIGN
//! ======
//! Transitions are plain methods on `UiState` so components only wire DOM
//! events to them. Browser side effects (scrolling, storage) are passed in
//! or live in `util`, which keeps every transition testable natively.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::content::Section;
use crate::util::scroll::is_past_threshold;
use crate::util::theme::Theme;

/// UI flags shared through a `RwSignal<UiState>` context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Update `scrolled` from a vertical offset. Returns whether it changed.
    pub fn record_scroll(&mut self, offset: f64) -> bool {
        let scrolled = is_past_threshold(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Navigate to the section named `id`.
    ///
    /// `scroll` performs the actual scroll and reports whether the anchor
    /// existed. The menu closes only after a successful scroll; an unknown
    /// id or missing anchor leaves the state untouched.
    pub fn navigate(&mut self, id: &str, scroll: impl FnOnce(Section) -> bool) -> Option<Section> {
        let section = Section::from_id(id)?;
        if !scroll(section) {
            return None;
        }
        self.close_menu();
        Some(section)
    }
}
