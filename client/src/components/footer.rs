//! Page footer with social links.

use leptos::prelude::*;

use crate::components::icon::IconSvg;
use crate::content::{SOCIAL_LINKS, SocialLink};

#[component]
fn SocialAnchor(link: SocialLink) -> impl IntoView {
    let external = link.is_external();
    view! {
        <a
            href=link.href
            class=format!("social-link social-link--{}", link.hover)
            aria-label=link.label
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            <IconSvg icon=link.icon class="icon icon--lg"/>
        </a>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container container--narrow site-footer__inner">
                <h3 class="gradient-text">"Mahalia Pires"</h3>
                <p class="site-footer__tagline">
                    "Développeuse web passionnée, créatrice d'expériences numériques exceptionnelles"
                </p>
                <div class="site-footer__social">
                    {SOCIAL_LINKS.into_iter().map(|link| view! { <SocialAnchor link=link/> }).collect_view()}
                </div>
                <p class="site-footer__copyright">
                    "© 2024 Mahalia Pires. Conçu avec ❤️ et beaucoup de café ☕"
                </p>
            </div>
        </footer>
    }
}
