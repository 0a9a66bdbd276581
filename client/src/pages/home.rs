//! The portfolio page: header, hero, education, projects, contact, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the one-time browser effects. After hydration it resolves the stored
//! theme and applies it, then follows window scroll to keep `UiState`'s
//! `scrolled` flag current. Sections below only render.

use leptos::prelude::*;

use crate::components::contact::Contact;
use crate::components::education::Education;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::state::ui::UiState;
use crate::util::{scroll, theme};

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Effects only run in the browser, once per mount.
    Effect::new(move || {
        let initial = theme::read_preference();
        theme::apply(initial);
        let offset = scroll::scroll_offset();
        ui.update(|u| {
            u.theme = initial;
            u.record_scroll(offset);
        });
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = scroll::scroll_offset();
            if scroll::is_past_threshold(offset) != ui.get_untracked().scrolled {
                ui.update(|u| {
                    u.record_scroll(offset);
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div class="page">
            <Header/>
            <main>
                <Hero/>
                <Education/>
                <Projects/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
