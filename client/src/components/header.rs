//! Fixed site header with section navigation, theme toggle, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is the only interactive chrome on the page. It reads and writes
//! the shared `UiState` context: theme clicks go through `util::theme`, nav
//! clicks go through `UiState::navigate` with `util::scroll` doing the scroll.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::components::icon::IconSvg;
use crate::content::{Icon, Section};
use crate::state::ui::UiState;
use crate::util::{scroll, theme};

pub fn header_class(scrolled: bool) -> &'static str {
    if scrolled { "site-header site-header--scrolled" } else { "site-header" }
}

pub fn mobile_panel_class(open: bool) -> &'static str {
    if open { "mobile-panel mobile-panel--open" } else { "mobile-panel" }
}

/// Icon for the theme button: the theme a click switches to.
pub fn theme_icon(dark: bool) -> Icon {
    if dark { Icon::Sun } else { Icon::Moon }
}

pub fn menu_icon(open: bool) -> Icon {
    if open { Icon::Close } else { Icon::Menu }
}

/// Smooth-scroll to `section` and close the mobile panel if it moved.
pub(crate) fn go_to_section(ui: RwSignal<UiState>, section: Section) {
    ui.update(|u| {
        u.navigate(section.id(), scroll::scroll_to_section);
    });
}

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_: leptos::ev::MouseEvent| {
        let next = theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    let go = move |section: Section| go_to_section(ui, section);

    let nav_buttons = move |class: &'static str| {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button class=class type="button" on:click=move |_| go(section)>
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let theme_button_label = move || {
        if ui.get().theme.is_dark() { "Activer le thème clair" } else { "Activer le thème sombre" }
    };

    view! {
        <header class=move || header_class(ui.get().scrolled)>
            <nav class="site-nav">
                <div class="site-nav__bar">
                    <a href="#about" class="site-nav__logo">
                        <img src="/logo.svg" alt="Logo Mahalia Pires"/>
                    </a>

                    <div class="site-nav__desktop">
                        {nav_buttons("site-nav__link")}
                        <button
                            class="theme-toggle"
                            type="button"
                            title=theme_button_label
                            aria-label=theme_button_label
                            on:click=on_toggle_theme
                        >
                            {move || view! { <IconSvg icon=theme_icon(ui.get().theme.is_dark())/> }}
                        </button>
                    </div>

                    <div class="site-nav__mobile-controls">
                        <button
                            class="theme-toggle theme-toggle--compact"
                            type="button"
                            aria-label=theme_button_label
                            on:click=on_toggle_theme
                        >
                            {move || view! { <IconSvg icon=theme_icon(ui.get().theme.is_dark())/> }}
                        </button>
                        <button
                            class="menu-toggle"
                            type="button"
                            aria-label="Menu"
                            aria-expanded=move || ui.get().mobile_menu_open.to_string()
                            on:click=move |_| ui.update(UiState::toggle_menu)
                        >
                            {move || view! { <IconSvg icon=menu_icon(ui.get().mobile_menu_open)/> }}
                        </button>
                    </div>
                </div>

                <div class=move || mobile_panel_class(ui.get().mobile_menu_open)>
                    <div class="mobile-panel__inner">{nav_buttons("mobile-panel__link")}</div>
                </div>
            </nav>
        </header>
    }
}
