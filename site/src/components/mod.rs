//! Leptos UI components for rendering the site.
//!
//! Each component is a Leptos `#[component]` function. They are composed by
//! [`SiteDocument`] into the full page.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── Header
//! ├── main
//! │   ├── Hero              #home
//! │   ├── Services          #services   (PathCardView x3, Pill)
//! │   ├── About             #about
//! │   ├── Families          #families
//! │   ├── Schools           #schools
//! │   ├── Professionals     #professionals
//! │   ├── Region            #dubai
//! │   ├── Resources         #resources
//! │   ├── Testimonials      #testimonials
//! │   └── ContactSection    #contact
//! ├── Footer
//! └── FloatingCta
//! ```
//!
//! Every section except the hero is wrapped in [`Section`], which carries
//! the reveal markers.
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_site`], but can be
//! rendered on their own:
//!
//! ```rust
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use speechbridge_site::components::Pill;
//!
//! let html = view! { <Pill label="AAC" /> }.to_html();
//! assert!(html.contains("AAC"));
//! ```

mod about;
mod contact;
mod controls;
mod document;
mod families;
mod footer;
mod header;
mod hero;
mod icons;
mod professionals;
mod region;
mod resources;
mod schools;
mod section;
mod services;
mod testimonials;

pub use about::About;
pub use contact::ContactSection;
pub use controls::{BulletList, ButtonLink, ButtonVariant, Card};
pub use document::{REVEAL_SCRIPT, SiteDocument};
pub use families::Families;
pub use footer::Footer;
pub use header::{FloatingCta, Header};
pub use hero::Hero;
pub use icons::*;
pub use professionals::Professionals;
pub use region::Region;
pub use resources::Resources;
pub use schools::Schools;
pub use section::{Pill, Section};
pub use services::Services;
pub use testimonials::Testimonials;
