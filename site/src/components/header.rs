//! Page shell: sticky header and floating email button.

use leptos::prelude::*;

use super::{ButtonLink, ICON_MAIL, Icon};
use crate::types::{Contact, NavLink};

/// Sticky header with brand, anchor navigation and an email button.
#[component]
pub fn Header(brand: String, nav: Vec<NavLink>, contact: Contact) -> impl IntoView {
    let aria_label = format!("Email {}", brand);

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#home" class="brand">{brand}</a>
                <nav class="site-nav" aria-label="Sections">
                    {nav.into_iter().map(|link| {
                        let href = link.href();
                        view! { <a href=href class="nav-link">{link.label}</a> }
                    }).collect::<Vec<_>>()}
                </nav>
                <div class="header-actions">
                    <ButtonLink href=contact.email_href() aria_label=aria_label>
                        <Icon path=ICON_MAIL class="icon-sm" />
                        "Email"
                    </ButtonLink>
                </div>
            </div>
        </header>
    }
}

/// Fixed bottom-right "Email now" button, visible at every scroll position.
#[component]
pub fn FloatingCta(contact: Contact) -> impl IntoView {
    view! {
        <div class="floating-cta">
            <ButtonLink href=contact.enquiry_href() large=true>
                <Icon path=ICON_MAIL class="icon-sm" />
                "Email now"
            </ButtonLink>
        </div>
    }
}
