//! Small building blocks shared by the sections: link buttons, cards, lists.

use leptos::prelude::*;

/// Visual weight of a [`ButtonLink`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

fn button_class(variant: ButtonVariant, large: bool, block: bool) -> String {
    let mut class = format!("btn {}", variant.class());
    if large {
        class.push_str(" btn-lg");
    }
    if block {
        class.push_str(" btn-block");
    }
    class
}

/// Anchor styled as a button.
#[component]
pub fn ButtonLink(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] large: bool,
    /// Stretch to the container width
    #[prop(optional)]
    block: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    /// Tooltip, used for hints such as "Add your booking link here"
    #[prop(optional_no_strip)]
    title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <a class=button_class(variant, large, block) href=href aria-label=aria_label title=title>
            {children()}
        </a>
    }
}

/// Bordered card with an optional title row.
#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    /// Extra classes for the card element
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {}", class)
    };

    view! {
        <article class=class>
            {title.map(|t| view! {
                <div class="card-header">
                    <h3 class="card-title">{t}</h3>
                </div>
            })}
            <div class="card-body">{children()}</div>
        </article>
    }
}

/// Plain disc-bulleted list.
#[component]
pub fn BulletList(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class="bullet-list">
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
        </ul>
    }
}
