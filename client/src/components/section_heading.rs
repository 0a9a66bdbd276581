use leptos::prelude::*;

/// Centered gradient title with a muted subtitle, shared by content sections.
#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2>
                <span class="gradient-text">{title}</span>
            </h2>
            <p>{subtitle}</p>
        </div>
    }
}
