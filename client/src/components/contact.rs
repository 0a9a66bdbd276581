//! Contact section (`#contact`): details card and a decorative message form.
//!
//! The form is not wired to any backend. Submission is swallowed so the
//! browser does not reload the page.

use leptos::prelude::*;

use crate::components::icon::IconSvg;
use crate::components::section_heading::SectionHeading;
use crate::content::{EMAIL, Icon, LOCATION, Section};

#[component]
fn ContactDetail(icon: Icon, accent: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="contact-detail">
            <div class=format!("contact-detail__icon contact-detail__icon--{accent}")>
                <IconSvg icon=icon/>
            </div>
            <div>
                <p class="contact-detail__label">{label}</p>
                <p class="contact-detail__value">{value}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::debug!("contact form submitted; no handler configured");
    };

    view! {
        <section id=Section::Contact.id() class="section section--tinted">
            <div class="container container--narrow">
                <SectionHeading
                    title="Travaillons Ensemble"
                    subtitle="Prêt à donner vie à votre projet ? Contactez-moi pour une collaboration créative"
                />
                <div class="contact__layout">
                    <div class="card contact__intro">
                        <h3>"Discutons de votre vision"</h3>
                        <p>
                            "Chaque projet est unique. Je prends le temps de comprendre vos besoins pour créer "
                            "des solutions sur mesure qui dépassent vos attentes."
                        </p>
                        <ContactDetail icon=Icon::Mail accent="purple-pink" label="Email" value=EMAIL/>
                        <ContactDetail icon=Icon::MapPin accent="blue-purple" label="Localisation" value=LOCATION/>
                    </div>

                    <form class="card contact-form" on:submit=on_submit>
                        <div class="contact-form__row">
                            <div class="field">
                                <label for="name">"Nom complet"</label>
                                <input type="text" id="name" placeholder="Votre nom"/>
                            </div>
                            <div class="field">
                                <label for="email">"Email"</label>
                                <input type="email" id="email" placeholder="votre@email.com"/>
                            </div>
                        </div>
                        <div class="field">
                            <label for="subject">"Sujet"</label>
                            <input type="text" id="subject" placeholder="Sujet de votre message"/>
                        </div>
                        <div class="field">
                            <label for="message">"Message"</label>
                            <textarea id="message" rows="6" placeholder="Parlez-moi de votre projet..."></textarea>
                        </div>
                        <button type="submit" class="button button--primary button--block">
                            <IconSvg icon=Icon::Send/>
                            <span>"Envoyer le message"</span>
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
