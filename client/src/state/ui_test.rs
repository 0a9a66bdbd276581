use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_defaults_are_light_closed_unscrolled() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.mobile_menu_open);
    assert!(!state.scrolled);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_menu_flips_open_flag() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.mobile_menu_open);
    state.toggle_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = UiState { mobile_menu_open: true, ..UiState::default() };
    state.close_menu();
    state.close_menu();
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn record_scroll_switches_at_threshold() {
    let mut state = UiState::default();
    assert!(!state.record_scroll(10.0));
    assert!(!state.scrolled);

    assert!(state.record_scroll(50.0));
    assert!(state.scrolled);

    assert!(!state.record_scroll(300.0));
    assert!(state.scrolled);

    assert!(state.record_scroll(49.0));
    assert!(!state.scrolled);
}

#[test]
fn record_scroll_leaves_other_flags_alone() {
    let mut state = UiState { theme: Theme::Dark, mobile_menu_open: true, scrolled: false };
    state.record_scroll(120.0);
    assert_eq!(state.theme, Theme::Dark);
    assert!(state.mobile_menu_open);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn navigate_valid_section_scrolls_and_closes_menu() {
    let mut state = UiState { mobile_menu_open: true, ..UiState::default() };
    let mut target = None;
    let result = state.navigate("projects", |section| {
        target = Some(section);
        true
    });
    assert_eq!(result, Some(Section::Projects));
    assert_eq!(target, Some(Section::Projects));
    assert!(!state.mobile_menu_open);
}

#[test]
fn navigate_with_closed_menu_keeps_it_closed() {
    let mut state = UiState::default();
    assert_eq!(state.navigate("about", |_| true), Some(Section::About));
    assert!(!state.mobile_menu_open);
}

#[test]
fn navigate_unknown_id_is_noop() {
    let mut state = UiState { theme: Theme::Dark, mobile_menu_open: true, scrolled: true };
    let before = state;
    let mut called = false;
    let result = state.navigate("blog", |_| {
        called = true;
        true
    });
    assert_eq!(result, None);
    assert!(!called);
    assert_eq!(state, before);
}

#[test]
fn navigate_missing_anchor_is_noop() {
    let mut state = UiState { mobile_menu_open: true, ..UiState::default() };
    let before = state;
    assert_eq!(state.navigate("contact", |_| false), None);
    assert_eq!(state, before);
}

#[test]
fn flags_do_not_depend_on_theme() {
    let mut light = UiState::default();
    let mut dark = UiState { theme: Theme::Dark, ..UiState::default() };
    light.record_scroll(75.0);
    dark.record_scroll(75.0);
    assert_eq!(light.scrolled, dark.scrolled);
}
