use leptos::prelude::*;

use super::{ButtonLink, ButtonVariant};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1523246192378-5694088703b5?q=80&w=1200&auto=format&fit=crop";

#[component]
pub fn Hero(badges: Vec<String>) -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-backdrop"></div>
            <div class="container hero-inner">
                <div class="grid grid-2 grid-wide items-center">
                    <div>
                        <h1 class="hero-title">"Warm, practical speech and language therapy"</h1>
                        <p class="hero-lead">
                            "Support for families, schools, and fellow therapists. Twenty years of experience with dysphagia, profound and multiple learning difficulties, AAC, and complex needs."
                        </p>
                        <div class="hero-badges">
                            {badges.into_iter().map(|badge| view! {
                                <span class="hero-badge">{badge}</span>
                            }).collect::<Vec<_>>()}
                        </div>
                        <div class="hero-actions">
                            <ButtonLink href="#services" large=true>"View services"</ButtonLink>
                            <ButtonLink href="#contact" variant=ButtonVariant::Outline large=true>
                                "Check availability"
                            </ButtonLink>
                        </div>
                    </div>
                    <div>
                        <img
                            class="hero-image"
                            src=HERO_IMAGE
                            alt="Friendly therapy session with parent and child"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
