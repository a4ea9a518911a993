use leptos::prelude::*;

use super::{ICON_CHECK_CIRCLE, Icon, Section};

const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1555421689-43cad7100751?q=80&w=1200&auto=format&fit=crop";

#[component]
pub fn About(brand: String, points: Vec<String>, threshold: f32) -> impl IntoView {
    let image_alt = format!("About {}", brand);

    view! {
        <Section
            id="about"
            title="About"
            subtitle="Twenty years of practice across homes, clinics, and schools."
            threshold=threshold
        >
            <div class="grid grid-3 grid-wide items-start">
                <div class="span-2">
                    <p>
                        "I am a qualified speech and language therapist with two decades of experience. I work with babies, children, teenagers, and young adults. I specialise in dysphagia and eating and drinking, profound and multiple learning difficulties, wheelchair users, and AAC."
                    </p>
                    <ul class="check-list">
                        {points.into_iter().map(|point| view! {
                            <li>
                                <Icon path=ICON_CHECK_CIRCLE />
                                <span>{point}</span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <div>
                    <img class="hero-image" src=ABOUT_IMAGE alt=image_alt />
                </div>
            </div>
        </Section>
    }
}
