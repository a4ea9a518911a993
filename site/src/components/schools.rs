use leptos::prelude::*;

use super::{BulletList, ButtonLink, ButtonVariant, Card, Section};
use crate::types::Package;

#[component]
pub fn Schools(offer: Vec<String>, packages: Vec<Package>, threshold: f32) -> impl IntoView {
    view! {
        <Section
            id="schools"
            title="Schools and nurseries"
            subtitle="Practical programmes that fit your setting."
            threshold=threshold
        >
            <div class="grid grid-2 grid-wide">
                <Card title="What I offer">
                    <BulletList items=offer />
                    <div class="button-row">
                        <ButtonLink href="#contact">"Request a call"</ButtonLink>
                        <ButtonLink href="#resources" variant=ButtonVariant::Outline>
                            "View sample agenda"
                        </ButtonLink>
                    </div>
                </Card>

                <Card title="Example packages">
                    <div class="package-grid">
                        {packages.into_iter().map(|pkg| view! {
                            <div class="package">
                                <div class="package-title">{pkg.title}</div>
                                <p class="muted small">{pkg.description}</p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </Card>
            </div>
        </Section>
    }
}
