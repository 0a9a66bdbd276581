use super::*;

const ALL: [Icon; 12] = [
    Icon::Moon,
    Icon::Sun,
    Icon::Menu,
    Icon::Close,
    Icon::Github,
    Icon::Linkedin,
    Icon::Mail,
    Icon::MapPin,
    Icon::Send,
    Icon::Code,
    Icon::Palette,
    Icon::Smartphone,
];

#[test]
fn every_icon_has_self_closing_markup() {
    for icon in ALL {
        let markup = icon_markup(icon);
        assert!(markup.starts_with('<'), "{icon:?}");
        assert!(markup.ends_with("/>"), "{icon:?}");
        assert!(!markup.contains("<svg"), "{icon:?}");
    }
}

#[test]
fn toggle_icons_differ() {
    assert_ne!(icon_markup(Icon::Moon), icon_markup(Icon::Sun));
    assert_ne!(icon_markup(Icon::Menu), icon_markup(Icon::Close));
}
