use super::*;

#[test]
fn below_threshold_is_not_scrolled() {
    assert!(!is_past_threshold(0.0));
    assert!(!is_past_threshold(49.9));
}

#[test]
fn threshold_and_above_is_scrolled() {
    assert!(is_past_threshold(50.0));
    assert!(is_past_threshold(50.1));
    assert!(is_past_threshold(4000.0));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_inert_without_hydrate() {
    assert_eq!(scroll_offset(), 0.0);
    assert!(!scroll_to_section(Section::Contact));
}
