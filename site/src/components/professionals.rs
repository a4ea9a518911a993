use leptos::prelude::*;

use super::{BulletList, ButtonLink, ButtonVariant, Card, Section};

#[component]
pub fn Professionals(
    support: Vec<String>,
    session_format: Vec<String>,
    threshold: f32,
) -> impl IntoView {
    view! {
        <Section
            id="professionals"
            title="Professionals"
            subtitle="Support for newly qualified and experienced therapists."
            threshold=threshold
        >
            <div class="grid grid-2 grid-wide">
                <Card title="Supervision and mentoring">
                    <BulletList items=support />
                    <div class="button-row">
                        <ButtonLink href="#contact">"Enquire"</ButtonLink>
                        <ButtonLink href="#resources" variant=ButtonVariant::Outline>
                            "Download supervision outline"
                        </ButtonLink>
                    </div>
                </Card>

                <Card title="How sessions work">
                    <BulletList items=session_format />
                </Card>
            </div>
        </Section>
    }
}
