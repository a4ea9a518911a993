//! Content data types for the one-page site.
//!
//! These types hold every literal list the page renders. They're designed to be:
//!
//! - **Serializable** - dump or inspect the effective content as JSON via serde
//! - **Clone-friendly** - components take owned data without borrowing issues
//! - **Default-able** - `SiteContent::default()` is the Speechbridge content
//!
//! # Example
//!
//! ```rust
//! use speechbridge_site::types::{DocumentLink, SiteContent};
//!
//! let mut content = SiteContent::default();
//! content.resources[0] = DocumentLink {
//!     label: "Classroom checklist (PDF)".into(),
//!     href: "/docs/classroom.pdf".into(),
//! };
//! assert!(content.validate().is_ok());
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Href used by content authors for links that still need a real target.
pub const PLACEHOLDER_HREF: &str = "#";

/// Phone digit used as a stand-in until the real number is known.
pub const PLACEHOLDER_PHONE_DIGIT: char = 'X';

/// Highest star rating a testimonial can carry.
pub const MAX_RATING: u8 = 5;

/// In-page navigation entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible label
    pub label: String,
    /// Target element id, without the leading `#`
    pub anchor: String,
}

impl NavLink {
    /// Build a link from a label and an anchor id.
    pub fn new(label: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            anchor: anchor.into(),
        }
    }

    /// Fragment href (`#anchor`).
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// A downloadable document (handout, checklist, template).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLink {
    pub label: String,
    pub href: String,
}

impl DocumentLink {
    /// Document that still points at the placeholder href.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: PLACEHOLDER_HREF.to_string(),
        }
    }

    /// True when the href has not been replaced with a real file URL yet.
    pub fn is_placeholder(&self) -> bool {
        let href = self.href.trim();
        href.is_empty() || href == PLACEHOLDER_HREF
    }
}

fn default_rating() -> u8 {
    MAX_RATING
}

/// A client quote shown in the testimonials grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    /// Who said it ("Parent of 6 year old")
    pub role: String,
    /// Number of stars rendered above the quote
    #[serde(default = "default_rating")]
    pub rating: u8,
}

impl Testimonial {
    pub fn new(quote: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            role: role.into(),
            rating: MAX_RATING,
        }
    }
}

/// Example package offered to schools and nurseries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub title: String,
    pub description: String,
}

impl Package {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Icon shown in a service path card title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathIcon {
    Family,
    School,
    Professional,
}

/// One of the service overview cards ("Families", "Schools and nurseries", ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathCard {
    pub icon: PathIcon,
    pub title: String,
    pub description: String,
    /// Short tags rendered as pills under the description
    pub pills: Vec<String>,
    /// Detail section the "View details" button jumps to
    pub anchor: String,
    /// Accessible label for the "View details" button
    pub aria_label: String,
}

/// Contact details shared by every email, phone and booking button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    /// Subject line pre-filled by general enquiry buttons
    pub enquiry_subject: String,
    /// Subject line pre-filled by the regional enquiry button
    pub region_subject: String,
    pub phone: String,
    pub booking_url: String,
    /// Mailing list sign-up for the regional page
    pub region_list_url: String,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            email: "hello@speechbridge.co.uk".into(),
            enquiry_subject: "Enquiry from Speechbridge website".into(),
            region_subject: "Dubai enquiry".into(),
            phone: "+44XXXXXXXXXX".into(),
            booking_url: PLACEHOLDER_HREF.into(),
            region_list_url: PLACEHOLDER_HREF.into(),
        }
    }
}

impl Contact {
    /// Plain `mailto:` link without a subject.
    pub fn email_href(&self) -> String {
        crate::mailto::mailto(&self.email, None)
    }

    /// `mailto:` link carrying the general enquiry subject.
    pub fn enquiry_href(&self) -> String {
        crate::mailto::mailto(&self.email, Some(&self.enquiry_subject))
    }

    /// `mailto:` link carrying the regional enquiry subject.
    pub fn region_href(&self) -> String {
        crate::mailto::mailto(&self.email, Some(&self.region_subject))
    }

    pub fn tel_href(&self) -> String {
        crate::mailto::tel(&self.phone)
    }

    /// True while the phone number still contains placeholder digits.
    pub fn has_placeholder_phone(&self) -> bool {
        self.phone.contains(PLACEHOLDER_PHONE_DIGIT)
    }
}

/// Timing of the one-shot entrance animation played by each section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the section that must be visible before it animates
    pub threshold: f32,
    pub duration_ms: u32,
    /// Initial downward shift in pixels
    pub offset_px: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            duration_ms: 450,
            offset_px: 12,
        }
    }
}

/// The regional page (Dubai by default).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionContent {
    /// Region name used in headings and button labels
    pub name: String,
    /// Element id of the section
    pub anchor: String,
    pub subtitle: String,
    /// "How I can help" bullet list
    pub help: Vec<String>,
    /// "Working with clinics and schools" bullet list
    pub partnerships: Vec<String>,
}

/// Everything the page renders that is not fixed heading copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    pub copyright_year: u16,
    pub contact: Contact,
    pub reveal: RevealOptions,
    pub nav: Vec<NavLink>,
    pub hero_badges: Vec<String>,
    pub paths: Vec<PathCard>,
    pub about_points: Vec<String>,
    pub family_help: Vec<String>,
    pub family_publications: Vec<DocumentLink>,
    pub school_offer: Vec<String>,
    pub school_packages: Vec<Package>,
    pub professional_support: Vec<String>,
    pub session_format: Vec<String>,
    pub region: RegionContent,
    pub resources: Vec<DocumentLink>,
    pub testimonials: Vec<Testimonial>,
    pub quick_details: Vec<String>,
    pub footer_links: Vec<NavLink>,
}

/// Reasons a [`SiteContent`] cannot be rendered.
#[derive(Debug, Error, PartialEq)]
pub enum ContentError {
    #[error("invalid enquiry email {0:?}")]
    InvalidEmail(String),

    #[error("reveal threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f32),

    #[error("navigation link {0:?} has an empty anchor")]
    EmptyAnchor(String),

    #[error("navigation anchor #{0} is listed more than once")]
    DuplicateAnchor(String),

    #[error("testimonial from {role:?} has rating {rating}, expected 1..={max}", max = MAX_RATING)]
    InvalidRating { role: String, rating: u8 },
}

impl SiteContent {
    /// Check the invariants the renderer relies on.
    ///
    /// Placeholder hrefs and phone digits are allowed here; they are
    /// content gaps, not render errors.
    pub fn validate(&self) -> Result<(), ContentError> {
        let email = self.contact.email.as_str();
        if email.is_empty() || !email.contains('@') || email.chars().any(char::is_whitespace) {
            return Err(ContentError::InvalidEmail(email.to_string()));
        }

        let threshold = self.reveal.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ContentError::InvalidThreshold(threshold));
        }

        let mut seen = HashSet::new();
        for link in &self.nav {
            if link.anchor.trim().is_empty() {
                return Err(ContentError::EmptyAnchor(link.label.clone()));
            }
            if !seen.insert(link.anchor.as_str()) {
                return Err(ContentError::DuplicateAnchor(link.anchor.clone()));
            }
        }

        for t in &self.testimonials {
            if t.rating == 0 || t.rating > MAX_RATING {
                return Err(ContentError::InvalidRating {
                    role: t.role.clone(),
                    rating: t.rating,
                });
            }
        }

        Ok(())
    }

    /// All downloadable documents, families first then resources.
    pub fn documents(&self) -> impl Iterator<Item = &DocumentLink> {
        self.family_publications.iter().chain(self.resources.iter())
    }

    pub fn documents_mut(&mut self) -> impl Iterator<Item = &mut DocumentLink> {
        self.family_publications
            .iter_mut()
            .chain(self.resources.iter_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_link_href_prefixes_hash() {
        assert_eq!(NavLink::new("About", "about").href(), "#about");
    }

    #[test]
    fn placeholder_documents() {
        assert!(DocumentLink::placeholder("x").is_placeholder());
        assert!(
            DocumentLink {
                label: "x".into(),
                href: "  ".into()
            }
            .is_placeholder()
        );
        assert!(
            !DocumentLink {
                label: "x".into(),
                href: "/docs/x.pdf".into()
            }
            .is_placeholder()
        );
    }

    #[test]
    fn default_contact_links() {
        let contact = Contact::default();
        assert_eq!(contact.email_href(), "mailto:hello@speechbridge.co.uk");
        assert_eq!(
            contact.enquiry_href(),
            "mailto:hello@speechbridge.co.uk?subject=Enquiry%20from%20Speechbridge%20website"
        );
        assert_eq!(
            contact.region_href(),
            "mailto:hello@speechbridge.co.uk?subject=Dubai%20enquiry"
        );
        assert_eq!(contact.tel_href(), "tel:+44XXXXXXXXXX");
        assert!(contact.has_placeholder_phone());
    }

    #[test]
    fn default_content_is_valid() {
        assert_eq!(SiteContent::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_email() {
        let mut content = SiteContent::default();
        content.contact.email = "hello at speechbridge".into();
        assert!(matches!(
            content.validate(),
            Err(ContentError::InvalidEmail(_))
        ));

        content.contact.email = String::new();
        assert!(matches!(
            content.validate(),
            Err(ContentError::InvalidEmail(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let mut content = SiteContent::default();
        content.reveal.threshold = 0.0;
        assert_eq!(content.validate(), Err(ContentError::InvalidThreshold(0.0)));

        content.reveal.threshold = 1.5;
        assert_eq!(content.validate(), Err(ContentError::InvalidThreshold(1.5)));

        content.reveal.threshold = 1.0;
        assert_eq!(content.validate(), Ok(()));
    }

    #[test]
    fn rejects_duplicate_and_empty_anchors() {
        let mut content = SiteContent::default();
        content.nav.push(NavLink::new("Again", "about"));
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateAnchor("about".into()))
        );

        let mut content = SiteContent::default();
        content.nav.push(NavLink::new("Nowhere", " "));
        assert_eq!(
            content.validate(),
            Err(ContentError::EmptyAnchor("Nowhere".into()))
        );
    }

    #[test]
    fn rejects_zero_star_rating() {
        let mut content = SiteContent::default();
        content.testimonials[1].rating = 0;
        assert!(matches!(
            content.validate(),
            Err(ContentError::InvalidRating { rating: 0, .. })
        ));
    }

    #[test]
    fn testimonial_rating_defaults_when_missing() {
        let t: Testimonial =
            serde_json::from_str(r#"{"quote":"Great","role":"Parent"}"#).expect("parse");
        assert_eq!(t.rating, MAX_RATING);
    }

    #[test]
    fn documents_chain_families_then_resources() {
        let content = SiteContent::default();
        let labels: Vec<_> = content.documents().map(|d| d.label.as_str()).collect();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], "Mealtime posture checklist (PDF)");
        assert_eq!(labels[5], "Supervision agreement template (DOCX)");
    }
}
