//! Contact section. Email is the primary route; booking and phone are secondary.

use leptos::prelude::*;

use super::{
    ButtonLink, ButtonVariant, Card, ICON_CALENDAR, ICON_MAIL, ICON_PHONE, Icon, Section,
};
use crate::types::{Contact, PLACEHOLDER_HREF};

#[component]
pub fn ContactSection(contact: Contact, details: Vec<String>, threshold: f32) -> impl IntoView {
    let enquiry_href = contact.enquiry_href();
    let tel_href = contact.tel_href();
    // Author hints only while the values are still placeholders.
    let booking_title =
        (contact.booking_url == PLACEHOLDER_HREF).then_some("Add your booking link here");
    let phone_title = contact
        .has_placeholder_phone()
        .then_some("Replace with your phone number");
    let booking_href = contact.booking_url;

    view! {
        <Section
            id="contact"
            title="Contact"
            subtitle="Email is the fastest way to check current availability."
            threshold=threshold
        >
            <div class="grid grid-3 grid-wide">
                <Card title="Get in touch" class="span-2">
                    <p class="muted">
                        "Send a short note with your name, your setting, and a brief summary of what you need. I will reply with available times and next steps."
                    </p>
                    <div class="button-row">
                        <ButtonLink href=enquiry_href large=true>
                            <Icon path=ICON_MAIL class="icon-sm" />
                            "Email"
                        </ButtonLink>
                        <ButtonLink
                            href=booking_href
                            variant=ButtonVariant::Outline
                            large=true
                            title=booking_title
                        >
                            <Icon path=ICON_CALENDAR class="icon-sm" />
                            "Book a call"
                        </ButtonLink>
                        <ButtonLink href=tel_href variant=ButtonVariant::Ghost large=true title=phone_title>
                            <Icon path=ICON_PHONE class="icon-sm" />
                            "Call"
                        </ButtonLink>
                    </div>
                </Card>
                <Card title="Quick details">
                    <div class="small">
                        {details.into_iter().map(|d| view! { <div>{d}</div> }).collect::<Vec<_>>()}
                    </div>
                </Card>
            </div>
        </Section>
    }
}
