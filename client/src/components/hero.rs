//! Hero block (`#about`): portrait, name, skills, intro, and primary links.

use leptos::prelude::*;

use crate::components::header::go_to_section;
use crate::components::icon::IconSvg;
use crate::content::{GITHUB_URL, Icon, LINKEDIN_URL, SKILLS, Section};
use crate::state::ui::UiState;

#[component]
pub fn Hero() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_contact = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        go_to_section(ui, Section::Contact);
    };

    view! {
        <section id=Section::About.id() class="hero">
            <div class="hero__glow hero__glow--top"></div>
            <div class="hero__glow hero__glow--bottom"></div>

            <div class="container hero__layout">
                <div class="hero__portrait">
                    <img src="/moi.jpg" alt="Mahalia Pires"/>
                </div>

                <div class="hero__text">
                    <span class="pill">"👋 Bonjour, je suis"</span>
                    <h1 class="hero__name">
                        <span class="gradient-text">"Mahalia"</span>
                        <br/>
                        <span>"Pires"</span>
                    </h1>
                    <div class="hero__role">
                        <h2>"Développeuse Web"</h2>
                        <div class="hero__skills">
                            {SKILLS
                                .into_iter()
                                .map(|skill| {
                                    view! {
                                        <span class=format!("skill-badge skill-badge--{}", skill.gradient)>
                                            <IconSvg icon=skill.icon class="icon icon--xs"/>
                                            <span>{skill.name}</span>
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <p class="hero__intro">
                        "Passionnée par la création d'expériences numériques exceptionnelles, je transforme vos "
                        "idées en applications web modernes et performantes. Spécialisée dans les technologies "
                        "React, TypeScript et les dernières innovations du développement frontend."
                    </p>

                    <div class="hero__actions">
                        <a href="#contact" class="button button--primary" on:click=on_contact>
                            <IconSvg icon=Icon::Mail/>
                            <span>"Me Contacter"</span>
                        </a>
                        <a
                            href=LINKEDIN_URL
                            class="icon-link"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn"
                        >
                            <IconSvg icon=Icon::Linkedin class="icon icon--lg"/>
                        </a>
                        <a
                            href=GITHUB_URL
                            class="icon-link"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub"
                        >
                            <IconSvg icon=Icon::Github class="icon icon--lg"/>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
