use leptos::prelude::*;

use super::{ICON_FILE_TEXT, Icon, Section};
use crate::types::DocumentLink;

/// Grid of document tiles; each still-placeholder tile reminds the author to swap in a file.
#[component]
pub fn Resources(documents: Vec<DocumentLink>, threshold: f32) -> impl IntoView {
    view! {
        <Section
            id="resources"
            title="Resources"
            subtitle="Quick links to helpful documents and templates."
            threshold=threshold
        >
            <div class="grid grid-3">
                {documents.into_iter().map(|doc| {
                    let placeholder = doc.is_placeholder();
                    view! {
                        <a href=doc.href class="resource-link">
                            <Icon path=ICON_FILE_TEXT />
                            <div>
                                <div class="resource-label">{doc.label}</div>
                                {placeholder.then(|| view! {
                                    <div class="resource-note">"Replace with your file"</div>
                                })}
                            </div>
                        </a>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </Section>
    }
}
