//! Default Speechbridge content.
//!
//! Every list the page renders lives here, in display order. Heading copy that
//! never changes stays inline in the components.

use crate::types::{
    Contact, DocumentLink, NavLink, Package, PathCard, PathIcon, RegionContent, RevealOptions,
    SiteContent, Testimonial,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Header navigation, in header order.
pub fn nav_links() -> Vec<NavLink> {
    [
        ("Home", "home"),
        ("About", "about"),
        ("Services", "services"),
        ("Families", "families"),
        ("Schools", "schools"),
        ("Professionals", "professionals"),
        ("Dubai", "dubai"),
        ("Resources", "resources"),
        ("Contact", "contact"),
    ]
    .into_iter()
    .map(|(label, anchor)| NavLink::new(label, anchor))
    .collect()
}

fn path_cards() -> Vec<PathCard> {
    vec![
        PathCard {
            icon: PathIcon::Family,
            title: "Families".into(),
            description: "Assessment, therapy, and coaching for speech, language, communication, and eating and drinking. Calm, friendly support that fits home life.".into(),
            pills: strings(&["Speech and language", "Dysphagia", "AAC"]),
            anchor: "families".into(),
            aria_label: "Read more about support for families".into(),
        },
        PathCard {
            icon: PathIcon::School,
            title: "Schools and nurseries".into(),
            description: "On site clinics, screening, staff training, and AAC support. Practical programmes that fit your timetable and budget.".into(),
            pills: strings(&[
                "In class support",
                "Communication friendly settings",
                "Coffee mornings",
            ]),
            anchor: "schools".into(),
            aria_label: "Read more about support for schools".into(),
        },
        PathCard {
            icon: PathIcon::Professional,
            title: "Professionals".into(),
            description: "Supervision, interview prep, and mentoring for newly qualified and experienced therapists. Practical, reflective, and supportive.".into(),
            pills: strings(&["NQP support", "HCPC standards", "Masters prep"]),
            anchor: "professionals".into(),
            aria_label: "Read more about support for professionals".into(),
        },
    ]
}

fn region() -> RegionContent {
    RegionContent {
        name: "Dubai".into(),
        anchor: "dubai".into(),
        subtitle: "Support for families and clinics in the UAE.".into(),
        help: strings(&[
            "Assessment and therapy for speech, language, and communication",
            "Eating and drinking assessment with clear mealtime plans",
            "AAC assessment, set up, and parent or staff coaching",
            "Short intensive blocks during planned Dubai visits",
            "Online follow up between visits",
        ]),
        partnerships: strings(&[
            "Partnerships with clinics and schools for casework and screening",
            "Staff training on safe feeding, communication friendly settings, and AAC",
            "Plain English reports for families, schools, and medical teams",
            "Secure online sessions where appropriate",
        ]),
    }
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "Our child felt comfortable right away. We saw clear progress and felt supported at every step.",
            "Parent of 6 year old",
        ),
        Testimonial::new(
            "The training was practical and easy to put in place. Staff confidence improved across the term.",
            "SENCo, primary school",
        ),
        Testimonial::new(
            "Supportive supervision with concrete actions after each session. Very helpful for interview prep.",
            "Newly qualified therapist",
        ),
    ]
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "Speechbridge".into(),
            copyright_year: 2025,
            contact: Contact::default(),
            reveal: RevealOptions::default(),
            nav: nav_links(),
            hero_badges: strings(&[
                "Babies to young adults",
                "Eating and drinking",
                "AAC",
                "Wheelchair users",
            ]),
            paths: path_cards(),
            about_points: strings(&[
                "Calm, friendly approach that helps families feel at ease",
                "Clear plans with measurable goals",
                "Close work with schools, teachers, and support staff",
                "Training that builds confidence and practical skills",
            ]),
            family_help: strings(&[
                "Speech sound, language, and communication",
                "Dysphagia, eating and drinking plans, safe swallow strategies",
                "AAC assessment and set up, parent coaching, device use",
                "Support for profound and multiple learning difficulties",
                "Wheelchair user positioning and feeding considerations",
            ]),
            family_publications: vec![
                DocumentLink::placeholder("Mealtime posture checklist (PDF)"),
                DocumentLink::placeholder("Early communication tips (PDF)"),
                DocumentLink::placeholder("AAC first steps for families (PDF)"),
            ],
            school_offer: strings(&[
                "On site clinics and casework",
                "Screening, target setting, and outcome tracking",
                "Staff training and in class coaching",
                "AAC assessment, device trials, and training",
                "Parent coffee mornings and workshops",
            ]),
            school_packages: vec![
                Package::new(
                    "Starter clinic",
                    "Half day per week for block based casework and advice.",
                ),
                Package::new(
                    "Training day",
                    "Communication friendly classrooms, AAC basics, and safe mealtimes.",
                ),
                Package::new(
                    "Whole school plan",
                    "Screening, targets, staff CPD, and impact review.",
                ),
                Package::new(
                    "Parent hub",
                    "Coffee mornings and workshop series across the term.",
                ),
            ],
            professional_support: strings(&[
                "Structured supervision that aligns with HCPC and RCSLT guidance",
                "Case discussion and clinical reflection",
                "Interview prep and Masters application coaching",
                "Goal setting and CPD planning",
            ]),
            session_format: strings(&[
                "Online or in person, clear notes and outcomes after each session",
                "Confidential, supportive space with practical next steps",
                "Flexible blocks or ad hoc sessions",
            ]),
            region: region(),
            resources: vec![
                DocumentLink::placeholder("Communication friendly classroom checklist (PDF)"),
                DocumentLink::placeholder("Safe swallow plan example (PDF)"),
                DocumentLink::placeholder("Supervision agreement template (DOCX)"),
            ],
            testimonials: testimonials(),
            quick_details: strings(&[
                "Based in the UK, working with local and online clients",
                "Fully qualified and registered",
                "Enhanced DBS, safeguarding training, insurance",
            ]),
            footer_links: vec![
                NavLink::new("About", "about"),
                NavLink::new("Resources", "resources"),
                NavLink::new("Contact", "contact"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_sizes() {
        let c = SiteContent::default();
        assert_eq!(c.nav.len(), 9);
        assert_eq!(c.hero_badges.len(), 4);
        assert_eq!(c.paths.len(), 3);
        assert_eq!(c.family_publications.len(), 3);
        assert_eq!(c.school_packages.len(), 4);
        assert_eq!(c.resources.len(), 3);
        assert_eq!(c.testimonials.len(), 3);
        assert_eq!(c.footer_links.len(), 3);
    }

    #[test]
    fn region_anchor_is_in_nav() {
        let c = SiteContent::default();
        assert!(c.nav.iter().any(|l| l.anchor == c.region.anchor));
    }

    #[test]
    fn every_path_card_points_at_a_nav_anchor() {
        let c = SiteContent::default();
        for card in &c.paths {
            assert!(
                c.nav.iter().any(|l| l.anchor == card.anchor),
                "no nav entry for #{}",
                card.anchor
            );
        }
    }
}
