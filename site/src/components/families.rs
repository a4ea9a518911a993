//! Families detail: what therapy covers plus downloadable handouts.

use leptos::prelude::*;

use super::{BulletList, ButtonLink, Card, ICON_FILE_TEXT, Icon, Section};
use crate::types::DocumentLink;

#[component]
pub fn Families(
    help: Vec<String>,
    publications: Vec<DocumentLink>,
    threshold: f32,
) -> impl IntoView {
    view! {
        <Section
            id="families"
            title="Families"
            subtitle="Home based and clinic based assessment and therapy."
            threshold=threshold
        >
            <div class="grid grid-2 grid-wide">
                <Card title="How I can help">
                    <BulletList items=help />
                    <div class="button-row">
                        <ButtonLink href="#contact">"Check availability"</ButtonLink>
                    </div>
                </Card>

                <Card title="Publications and handouts">
                    <p class="muted">"A few useful guides. Replace the links with your own files."</p>
                    <div class="publication-list">
                        {publications.into_iter().map(|doc| view! {
                            <a href=doc.href class="publication-link">
                                <Icon path=ICON_FILE_TEXT class="icon-sm" />
                                <span>{doc.label}</span>
                            </a>
                        }).collect::<Vec<_>>()}
                    </div>
                </Card>
            </div>
        </Section>
    }
}
