//! # speechbridge-site
//!
//! Leptos SSR renderer for the Speechbridge one-page website.
//!
//! The whole site is static content: a header, hero, service cards, a run of
//! informational sections, a footer and a floating email button. This crate
//! renders it to a single self-contained HTML file with inline CSS and a tiny
//! reveal script, so it can be dropped onto any static host.
//!
//! ## Quick Start
//!
//! ```rust
//! use speechbridge_site::{render_site, types::SiteContent};
//!
//! let content = SiteContent::default();
//! let html = render_site(&content);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Three simple paths"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content data model (nav links, documents, testimonials, ...)
//! - [`content`] - The default Speechbridge content
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//! - [`mailto`] - `mailto:` / `tel:` href builders
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <SiteDocument content=content /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is involved. The only client-side
//! behaviour is the scroll-triggered entrance animation, handled by
//! [`components::REVEAL_SCRIPT`].

pub mod components;
pub mod content;
pub mod mailto;
pub mod styles;
pub mod types;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{ContentError, SiteContent};

/// Render the complete HTML page for `content`.
///
/// Rendering is pure: the same content always yields the same bytes.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use speechbridge_site::{render_site, types::SiteContent};
///
/// let mut content = SiteContent::default();
/// content.contact.email = "office@example.org".into();
///
/// let html = render_site(&content);
/// assert!(html.contains("mailto:office@example.org"));
/// ```
pub fn render_site(content: &SiteContent) -> String {
    let doc = view! { <SiteDocument content=content.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Validate `content`, then render it.
pub fn try_render_site(content: &SiteContent) -> Result<String, ContentError> {
    content.validate()?;
    Ok(render_site(content))
}
