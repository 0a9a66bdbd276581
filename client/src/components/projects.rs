//! Project gallery (`#projects`) of placeholder cards.

use leptos::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{ProjectCard, Section, projects};

#[component]
fn ProjectTile(card: ProjectCard) -> impl IntoView {
    view! {
        <article class="card project-card">
            <div class="project-card__banner">
                <div class="project-card__shade"></div>
                <div class="project-card__badge">{card.badge()}</div>
                <div class="project-card__dots">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
            <div class="project-card__body">
                <h3>{card.title()}</h3>
                <p>{card.description()}</p>
                <div class="project-card__tags">
                    {card.tech().iter().map(|tech| view! { <span class="pill">{*tech}</span> }).collect_view()}
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="section">
            <div class="container">
                <SectionHeading
                    title="Mes Réalisations"
                    subtitle="Une sélection de projets qui démontrent mes compétences et ma créativité"
                />
                <div class="grid grid--three">
                    {projects().into_iter().map(|card| view! { <ProjectTile card=card/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
