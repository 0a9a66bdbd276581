//! Inline stroke icons (24x24 grid, `currentColor`).

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

use crate::content::Icon;

/// SVG child markup for `icon`.
pub fn icon_markup(icon: Icon) -> &'static str {
    match icon {
        Icon::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
        Icon::Sun => concat!(
            r#"<circle cx="12" cy="12" r="4"/>"#,
            r#"<path d="M12 2v2"/><path d="M12 20v2"/>"#,
            r#"<path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/>"#,
            r#"<path d="M2 12h2"/><path d="M20 12h2"/>"#,
            r#"<path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
        ),
        Icon::Menu => concat!(
            r#"<line x1="4" x2="20" y1="6" y2="6"/>"#,
            r#"<line x1="4" x2="20" y1="12" y2="12"/>"#,
            r#"<line x1="4" x2="20" y1="18" y2="18"/>"#,
        ),
        Icon::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        Icon::Github => concat!(
            r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 "#,
            r#"0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 "#,
            r#"3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
            r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
        ),
        Icon::Linkedin => concat!(
            r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
            r#"<rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
        ),
        Icon::Mail => concat!(
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
            r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
        ),
        Icon::MapPin => concat!(
            r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/>"#,
            r#"<circle cx="12" cy="10" r="3"/>"#,
        ),
        Icon::Send => r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#,
        Icon::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
        Icon::Palette => concat!(
            r#"<circle cx="13.5" cy="6.5" r=".5" fill="currentColor"/>"#,
            r#"<circle cx="17.5" cy="10.5" r=".5" fill="currentColor"/>"#,
            r#"<circle cx="8.5" cy="7.5" r=".5" fill="currentColor"/>"#,
            r#"<circle cx="6.5" cy="12.5" r=".5" fill="currentColor"/>"#,
            r#"<path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125"#,
            r#"-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 "#,
            r#"5.555-5.554C21.965 6.012 17.461 2 12 2z"/>"#,
        ),
        Icon::Smartphone => r#"<rect width="14" height="20" x="5" y="2" rx="2" ry="2"/><path d="M12 18h.01"/>"#,
    }
}

/// Decorative icon; hidden from assistive tech.
#[component]
pub fn IconSvg(icon: Icon, #[prop(default = "icon")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=icon_markup(icon)
        ></svg>
    }
}
