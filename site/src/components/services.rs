//! "Three simple paths" overview cards.

use leptos::prelude::*;

use super::{ButtonLink, Icon, Pill, Section, path_icon};
use crate::types::PathCard;

#[component]
pub fn Services(paths: Vec<PathCard>, threshold: f32) -> impl IntoView {
    view! {
        <Section
            id="services"
            title="Three simple paths"
            subtitle="Choose the route that fits you best and find clear next steps."
            threshold=threshold
        >
            <div class="grid grid-3">
                {paths.into_iter().map(|card| view! { <PathCardView card=card /> }).collect::<Vec<_>>()}
            </div>
        </Section>
    }
}

#[component]
fn PathCardView(card: PathCard) -> impl IntoView {
    let PathCard {
        icon,
        title,
        description,
        pills,
        anchor,
        aria_label,
    } = card;
    let href = format!("#{}", anchor);

    view! {
        <article class="card path-card">
            <div class="card-header">
                <h3 class="card-title">
                    <Icon path=path_icon(icon) />
                    <span class="path-title">{title}</span>
                </h3>
            </div>
            <div class="card-body">
                <p class="muted">{description}</p>
                <div class="pills">
                    {pills.into_iter().map(|p| view! { <Pill label=p /> }).collect::<Vec<_>>()}
                </div>
                <div class="card-action">
                    <ButtonLink href=href block=true aria_label=aria_label>
                        "View details"
                    </ButtonLink>
                </div>
            </div>
        </article>
    }
}
