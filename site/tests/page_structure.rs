//! Structural checks on the rendered page.
//!
//! The page is pure static content, so these tests pin what a visitor sees:
//! anchors resolve, lists have the right length, every email button goes to
//! the same inbox.

use speechbridge_site::mailto::mailto_address;
use speechbridge_site::render_site;
use speechbridge_site::types::SiteContent;

fn page() -> String {
    render_site(&SiteContent::default())
}

/// Slice of `html` from the first occurrence of `start` to the next `end`.
fn between<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
    let from = html
        .find(start)
        .unwrap_or_else(|| panic!("missing {start:?}"));
    let rest = &html[from..];
    let to = rest.find(end).unwrap_or(rest.len());
    &rest[..to]
}

fn first_mailto(fragment: &str) -> String {
    let from = fragment
        .find("href=\"mailto:")
        .expect("fragment has a mailto link")
        + "href=\"".len();
    let rest = &fragment[from..];
    let end = rest.find('"').expect("closing quote");
    rest[..end].to_string()
}

mod anchors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_nav_link_targets_exactly_one_section() {
        let content = SiteContent::default();
        let html = render_site(&content);

        for link in &content.nav {
            let id_attr = format!("id=\"{}\"", link.anchor);
            assert_eq!(
                html.matches(&id_attr).count(),
                1,
                "expected exactly one element with {id_attr}"
            );
        }
    }

    #[test]
    fn nav_covers_the_expected_sections() {
        let anchors: Vec<String> = SiteContent::default()
            .nav
            .into_iter()
            .map(|l| l.anchor)
            .collect();
        assert_eq!(
            anchors,
            vec![
                "home",
                "about",
                "services",
                "families",
                "schools",
                "professionals",
                "dubai",
                "resources",
                "contact"
            ]
        );
    }

    #[test]
    fn footer_links_resolve() {
        let content = SiteContent::default();
        let html = render_site(&content);
        for link in &content.footer_links {
            assert!(html.contains(&format!("id=\"{}\"", link.anchor)));
        }
    }
}

mod first_render {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_has_nine_nav_links() {
        let html = page();
        let header = between(&html, "class=\"site-header\"", "</header>");
        assert_eq!(header.matches("class=\"nav-link\"").count(), 9);
    }

    #[test]
    fn hero_has_four_badges() {
        let html = page();
        let hero = between(&html, "id=\"home\"", "</section>");
        assert_eq!(hero.matches("class=\"hero-badge\"").count(), 4);
        for badge in ["Babies to young adults", "Eating and drinking", "Wheelchair users"] {
            assert!(hero.contains(badge), "missing badge {badge}");
        }
    }

    #[test]
    fn services_has_three_path_cards_in_order() {
        let html = page();
        let services = between(&html, "id=\"services\"", "</section>");
        assert_eq!(services.matches("class=\"card path-card\"").count(), 3);

        let families = services.find("Families").expect("families card");
        let schools = services.find("Schools and nurseries").expect("schools card");
        let professionals = services.find("Professionals").expect("professionals card");
        assert!(families < schools && schools < professionals);
    }

    #[test]
    fn path_cards_link_to_detail_sections() {
        let html = page();
        let services = between(&html, "id=\"services\"", "</section>");
        for anchor in ["#families", "#schools", "#professionals"] {
            assert!(services.contains(&format!("href=\"{anchor}\"")));
        }
        assert_eq!(services.matches("class=\"pill\"").count(), 9);
    }
}

mod lists {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_testimonial_has_five_stars() {
        let html = page();
        let section = between(&html, "id=\"testimonials\"", "</section>");
        let cards: Vec<&str> = section.split("class=\"card testimonial\"").skip(1).collect();

        assert_eq!(cards.len(), 3);
        for card in cards {
            assert_eq!(card.matches("rating-star").count(), 5);
        }
    }

    #[test]
    fn resources_has_three_document_links() {
        let html = page();
        assert_eq!(html.matches("class=\"resource-link\"").count(), 3);
    }

    #[test]
    fn families_has_three_publication_links() {
        let html = page();
        let families = between(&html, "id=\"families\"", "</section>");
        assert_eq!(families.matches("class=\"publication-link\"").count(), 3);
    }

    #[test]
    fn schools_lists_four_packages() {
        let html = page();
        let schools = between(&html, "id=\"schools\"", "</section>");
        assert_eq!(schools.matches("class=\"package\"").count(), 4);
        assert!(schools.contains("Whole school plan"));
    }
}

mod contact {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_and_floating_cta_share_the_enquiry_address() {
        let html = page();
        let header = between(&html, "class=\"site-header\"", "</header>");
        let cta = between(&html, "class=\"floating-cta\"", "</div>");

        let header_href = first_mailto(header);
        let cta_href = first_mailto(cta);

        assert_eq!(mailto_address(&header_href), mailto_address(&cta_href));
        assert_eq!(
            mailto_address(&header_href),
            Some("hello@speechbridge.co.uk")
        );
    }

    #[test]
    fn floating_cta_prefills_subject() {
        let html = page();
        let cta = between(&html, "class=\"floating-cta\"", "</div>");
        assert_eq!(
            first_mailto(cta),
            "mailto:hello@speechbridge.co.uk?subject=Enquiry%20from%20Speechbridge%20website"
        );
    }

    #[test]
    fn region_email_uses_region_subject() {
        let html = page();
        let region = between(&html, "id=\"dubai\"", "</section>");
        assert_eq!(
            first_mailto(region),
            "mailto:hello@speechbridge.co.uk?subject=Dubai%20enquiry"
        );
    }

    #[test]
    fn contact_section_has_tel_link() {
        let html = page();
        let contact = between(&html, "id=\"contact\"", "</section>");
        assert!(contact.contains("href=\"tel:+44XXXXXXXXXX\""));
        assert!(contact.contains("Replace with your phone number"));
    }

    #[test]
    fn changing_the_email_moves_every_button() {
        let mut content = SiteContent::default();
        content.contact.email = "office@example.org".into();
        let html = render_site(&content);

        assert!(!html.contains("hello@speechbridge.co.uk"));
        // header, region, contact section, floating CTA
        assert_eq!(html.matches("mailto:office@example.org").count(), 4);
    }
}

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rendering_is_idempotent() {
        let content = SiteContent::default();
        assert_eq!(render_site(&content), render_site(&content));
    }

    #[test]
    fn every_section_below_the_hero_is_revealed() {
        let html = page();
        // services, about, families, schools, professionals, dubai,
        // resources, testimonials, contact
        assert_eq!(html.matches("data-reveal=").count(), 9);
        assert!(!between(&html, "id=\"home\"", "</section>").contains("data-reveal"));
    }

    #[test]
    fn footer_carries_copyright() {
        let html = page();
        let footer = between(&html, "class=\"site-footer\"", "</footer>");
        assert!(footer.contains("2025 Speechbridge. All rights reserved."));
        assert_eq!(footer.matches("class=\"footer-link\"").count(), 3);
    }
}
