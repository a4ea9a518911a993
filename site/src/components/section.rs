//! Section wrapper and pill tag.
//!
//! Every content block below the hero goes through [`Section`], which adds
//! the heading block and marks the body for the one-shot reveal animation.

use leptos::prelude::*;

/// A titled page section that fades in the first time it scrolls into view.
///
/// The inner `.reveal` element carries `data-reveal` and `data-threshold`;
/// the page script observes it and adds `is-visible` exactly once.
#[component]
pub fn Section(
    /// Element id, the target of `#id` anchor links
    #[prop(into)]
    id: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Visible fraction that triggers the reveal
    threshold: f32,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="page-section">
            <div class="container">
                <div class="reveal" data-reveal="once" data-threshold=threshold.to_string()>
                    <div class="section-header">
                        <h2 class="section-title">{title}</h2>
                        {subtitle.map(|s| view! { <p class="section-subtitle">{s}</p> })}
                    </div>
                    {children()}
                </div>
            </div>
        </section>
    }
}

/// Short inline tag with chip styling.
#[component]
pub fn Pill(#[prop(into)] label: String) -> impl IntoView {
    view! { <span class="pill">{label}</span> }
}
