//! Education timeline (`#education`).

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{EDUCATION, EducationEntry, Section};

#[component]
fn EducationCard(entry: EducationEntry) -> impl IntoView {
    view! {
        <article class="card education-card">
            <div class="education-card__head">
                <img class="education-card__logo" src=entry.image alt=format!("{} Logo", entry.title)/>
                <span class="education-card__period">{entry.period}</span>
            </div>
            <h3 class="education-card__title">{entry.title}</h3>
            <p class="education-card__school">{entry.school}</p>
            <p class="education-card__description">{entry.description}</p>
        </article>
    }
}

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id=Section::Education.id() class="section section--tinted">
            <div class="container">
                <SectionHeading
                    title="Mon Parcours"
                    subtitle="Une formation solide et progressive dans le domaine du développement web"
                />
                <div class="grid grid--three">
                    {EDUCATION.into_iter().map(|entry| view! { <EducationCard entry=entry/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
