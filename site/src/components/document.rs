//! Root document component - the complete HTML page
//!
//! Header, the main sections in page order, footer, floating call-to-action
//! and the reveal script.

use super::{
    About, ContactSection, Families, FloatingCta, Footer, Header, Hero, Professionals, Region,
    Resources, Schools, Services, Testimonials,
};
use crate::styles::{CSP, NOSCRIPT_CSS, SITE_CSS};
use crate::types::SiteContent;
use leptos::prelude::*;

const DESCRIPTION: &str = "Warm, practical speech and language therapy for families, schools, and fellow therapists. Dysphagia, AAC, and complex needs.";

/// The complete HTML document for the site
#[component]
pub fn SiteDocument(content: SiteContent) -> impl IntoView {
    let SiteContent {
        brand,
        copyright_year,
        contact,
        reveal,
        nav,
        hero_badges,
        paths,
        about_points,
        family_help,
        family_publications,
        school_offer,
        school_packages,
        professional_support,
        session_format,
        region,
        resources,
        testimonials,
        quick_details,
        footer_links,
    } = content;

    let title = format!("{} | Speech and language therapy", brand);
    let body_style = format!(
        "--reveal-duration: {}ms; --reveal-offset: {}px;",
        reveal.duration_ms, reveal.offset_px
    );
    let threshold = reveal.threshold;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=DESCRIPTION />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
                <noscript>
                    <style>{NOSCRIPT_CSS}</style>
                </noscript>
            </head>
            <body style=body_style>
                <Header brand=brand.clone() nav=nav contact=contact.clone() />
                <main>
                    <Hero badges=hero_badges />
                    <Services paths=paths threshold=threshold />
                    <About brand=brand.clone() points=about_points threshold=threshold />
                    <Families help=family_help publications=family_publications threshold=threshold />
                    <Schools offer=school_offer packages=school_packages threshold=threshold />
                    <Professionals
                        support=professional_support
                        session_format=session_format
                        threshold=threshold
                    />
                    <Region region=region contact=contact.clone() threshold=threshold />
                    <Resources documents=resources threshold=threshold />
                    <Testimonials testimonials=testimonials threshold=threshold />
                    <ContactSection contact=contact.clone() details=quick_details threshold=threshold />
                </main>
                <Footer brand=brand year=copyright_year links=footer_links />
                <FloatingCta contact=contact />
                <script>{REVEAL_SCRIPT}</script>
            </body>
        </html>
    }
}

/// One-shot entrance animation.
///
/// Each `[data-reveal]` element gets `is-visible` the first time its visible
/// ratio reaches its `data-threshold`, then is unobserved so it never replays.
pub const REVEAL_SCRIPT: &str = r#"
(() => {
  const targets = document.querySelectorAll('[data-reveal]');
  const show = (el) => el.classList.add('is-visible');

  if (!('IntersectionObserver' in window)) {
    targets.forEach(show);
    return;
  }

  // One observer per distinct threshold
  const observers = new Map();
  const observerFor = (threshold) => {
    if (!observers.has(threshold)) {
      const observer = new IntersectionObserver((entries) => {
        entries.forEach((entry) => {
          if (entry.isIntersecting && entry.intersectionRatio >= threshold) {
            show(entry.target);
            observer.unobserve(entry.target);
          }
        });
      }, { threshold });
      observers.set(threshold, observer);
    }
    return observers.get(threshold);
  };

  targets.forEach((el) => {
    const parsed = parseFloat(el.dataset.threshold);
    const threshold = parsed > 0 && parsed <= 1 ? parsed : 0.2;
    observerFor(threshold).observe(el);
  });
})();
"#;
