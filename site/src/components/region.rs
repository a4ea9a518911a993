//! Regional page (Dubai by default).

use leptos::prelude::*;

use super::{BulletList, ButtonLink, ButtonVariant, Card, Section};
use crate::types::{Contact, RegionContent};

#[component]
pub fn Region(region: RegionContent, contact: Contact, threshold: f32) -> impl IntoView {
    let RegionContent {
        name,
        anchor,
        subtitle,
        help,
        partnerships,
    } = region;

    let help_title = format!("How I can help in {}", name);
    let availability = format!("Request {} availability", name);
    let email_label = format!("Email about {}", name);
    let list_label = format!("Join the {} list", name);
    let email_href = contact.region_href();
    let list_href = contact.region_list_url;

    view! {
        <Section id=anchor title=name subtitle=subtitle threshold=threshold>
            <div class="grid grid-2 grid-wide">
                <Card title=help_title>
                    <BulletList items=help />
                    <div class="button-row">
                        <ButtonLink href="#contact">{availability}</ButtonLink>
                    </div>
                </Card>
                <Card title="Working with clinics and schools">
                    <BulletList items=partnerships />
                    <div class="button-row">
                        <ButtonLink href=email_href>{email_label}</ButtonLink>
                        <ButtonLink href=list_href variant=ButtonVariant::Outline>
                            {list_label}
                        </ButtonLink>
                    </div>
                </Card>
            </div>
        </Section>
    }
}
