use leptos::prelude::*;

use super::{ICON_STAR, Icon, Section};
use crate::types::Testimonial;

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>, threshold: f32) -> impl IntoView {
    view! {
        <Section
            id="testimonials"
            title="Testimonials"
            subtitle="Shared with permission. Names can be added once confirmed."
            threshold=threshold
        >
            <div class="grid grid-3">
                {testimonials.into_iter().map(|t| view! { <TestimonialCard testimonial=t /> }).collect::<Vec<_>>()}
            </div>
        </Section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let Testimonial {
        quote,
        role,
        rating,
    } = testimonial;
    let label = format!("Rated {} out of {}", rating, crate::types::MAX_RATING);
    let quote = format!("\u{201c}{}\u{201d}", quote);

    view! {
        <article class="card testimonial">
            <div class="card-body">
                <div class="rating" role="img" aria-label=label>
                    {(0..rating).map(|_| view! {
                        <Icon path=ICON_STAR class="icon-sm rating-star" fill="currentColor" />
                    }).collect::<Vec<_>>()}
                </div>
                <p class="quote">{quote}</p>
                <div class="quote-role">{role}</div>
            </div>
        </article>
    }
}
