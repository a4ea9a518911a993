//! CSS for the Speechbridge page.
//!
//! The stylesheet is inlined into the document head so the page is a single
//! self-contained file.
//!
//! # Customization
//!
//! ```rust
//! use speechbridge_site::styles::SITE_CSS;
//!
//! let brand_override = ":root { --accent: #0f766e; }";
//! let combined = format!("{}\n{}", SITE_CSS, brand_override);
//! assert!(combined.contains("--accent"));
//! ```
//!
//! # Features
//!
//! - Soft blue hero gradient, rounded cards, pill tags
//! - Sticky translucent header, fixed floating call-to-action
//! - Reveal animation driven by `--reveal-duration` / `--reveal-offset`
//! - `prefers-reduced-motion` and no-JS fallbacks

/// Complete CSS for the page.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --fg: #0f172a;
    --muted: #64748b;
    --muted-bg: #f1f5f9;
    --border: #e2e8f0;
    --accent: #1d4ed8;
    --accent-fg: #ffffff;
    --hero-from: #eff6ff;
    --radius: 16px;
    --container-max: 72rem;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --reveal-duration: 450ms;
    --reveal-offset: 12px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg);
    color: var(--fg);
    font-family: var(--font-sans);
    line-height: 1.6;
}

a {
    color: inherit;
}

img {
    display: block;
    max-width: 100%;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1rem;
}

@media (min-width: 640px) {
    .container { padding: 0 1.5rem; }
}

@media (min-width: 1024px) {
    .container { padding: 0 2rem; }
}

.icon {
    width: 1.25rem;
    height: 1.25rem;
    flex-shrink: 0;
}

.icon-sm {
    width: 1rem;
    height: 1rem;
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 40;
    width: 100%;
    border-bottom: 1px solid var(--border);
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(8px);
}

.header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 4rem;
}

.brand {
    font-weight: 600;
    font-size: 1.125rem;
    text-decoration: none;
}

.site-nav {
    display: none;
    align-items: center;
    gap: 1.5rem;
    font-size: 0.875rem;
}

@media (min-width: 768px) {
    .site-nav { display: flex; }
}

.nav-link {
    text-decoration: none;
    text-underline-offset: 4px;
}

.nav-link:hover {
    text-decoration: underline;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border-radius: 0.5rem;
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
    font-weight: 500;
    text-decoration: none;
    border: 1px solid transparent;
    transition: background 150ms ease, box-shadow 150ms ease;
}

.btn-lg {
    padding: 0.75rem 1.5rem;
    font-size: 1rem;
}

.btn-primary {
    background: var(--accent);
    color: var(--accent-fg);
}

.btn-primary:hover {
    background: #1e40af;
}

.btn-outline {
    border-color: var(--border);
    background: var(--bg);
}

.btn-outline:hover,
.btn-ghost:hover {
    background: var(--muted-bg);
}

.btn-ghost {
    background: transparent;
}

.btn-block {
    width: 100%;
}

.button-row {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
    padding-top: 0.75rem;
}

/* Hero */
.hero {
    position: relative;
    isolation: isolate;
    overflow: hidden;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    z-index: -10;
    background: linear-gradient(to bottom, var(--hero-from), var(--bg));
}

.hero-inner {
    padding: 5rem 0;
}

.hero-title {
    margin: 0;
    font-size: 2.25rem;
    font-weight: 600;
    line-height: 1.2;
}

.hero-lead {
    margin-top: 1rem;
    font-size: 1.125rem;
    color: var(--muted);
}

.hero-badges {
    margin-top: 1.5rem;
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.hero-badge {
    display: inline-flex;
    border-radius: 0.375rem;
    padding: 0.125rem 0.625rem;
    font-size: 0.75rem;
    font-weight: 600;
    background: var(--accent);
    color: var(--accent-fg);
}

.hero-actions {
    margin-top: 2rem;
    display: flex;
    gap: 0.75rem;
}

.hero-image {
    width: 100%;
    height: 20rem;
    object-fit: cover;
    border-radius: var(--radius);
    box-shadow: 0 1px 3px rgba(15, 23, 42, 0.15);
}

@media (min-width: 768px) {
    .hero-title { font-size: 3rem; }
    .hero-image { height: 24rem; }
}

/* Grids */
.grid {
    display: grid;
    gap: 1.5rem;
}

.grid-wide {
    gap: 2rem;
}

@media (min-width: 768px) {
    .grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .span-2 { grid-column: span 2 / span 2; }
}

.items-center { align-items: center; }
.items-start { align-items: start; }

/* Sections */
.page-section {
    padding: 3.5rem 0;
    scroll-margin-top: 4rem;
}

.section-header {
    margin-bottom: 2rem;
}

.section-title {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 600;
    letter-spacing: -0.025em;
}

.section-subtitle {
    margin-top: 0.5rem;
    max-width: 48rem;
    color: var(--muted);
}

@media (min-width: 768px) {
    .section-title { font-size: 2.25rem; }
}

/* Reveal */
.reveal {
    opacity: 0;
    transform: translateY(var(--reveal-offset));
    transition:
        opacity var(--reveal-duration) ease-out,
        transform var(--reveal-duration) ease-out;
}

.reveal.is-visible {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    .reveal {
        opacity: 1;
        transform: none;
        transition: none;
    }
}

/* Cards */
.card {
    display: flex;
    flex-direction: column;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--bg);
    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
}

.card-header {
    padding: 1.5rem 1.5rem 0;
}

.card-title {
    margin: 0;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 1.25rem;
    font-weight: 600;
}

.card-body {
    flex: 1;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    padding: 1.5rem;
}

.muted {
    color: var(--muted);
}

.small {
    font-size: 0.875rem;
}

.bullet-list {
    margin: 0;
    padding-left: 1.25rem;
    list-style: disc;
}

.bullet-list li + li {
    margin-top: 0.25rem;
}

.check-list {
    margin: 0;
    padding: 0;
    list-style: none;
}

.check-list li {
    display: flex;
    align-items: flex-start;
    gap: 0.5rem;
}

.check-list li + li {
    margin-top: 0.5rem;
}

/* Pills */
.pills {
    margin-top: 1rem;
}

.pill {
    display: inline-flex;
    align-items: center;
    border: 1px solid var(--border);
    border-radius: 9999px;
    padding: 0.25rem 0.75rem;
    font-size: 0.875rem;
    margin: 0 0.5rem 0.5rem 0;
}

.card-action {
    margin-top: auto;
    padding-top: 1.5rem;
}

/* Documents */
.publication-link {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    text-decoration: underline;
}

.resource-link {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    text-decoration: none;
}

.resource-link:hover {
    background: rgba(241, 245, 249, 0.4);
}

.resource-label {
    font-weight: 500;
}

.resource-note {
    font-size: 0.75rem;
    color: var(--muted);
}

/* Packages */
.package-grid {
    display: grid;
    gap: 0.75rem;
}

@media (min-width: 640px) {
    .package-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

.package {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 1rem;
}

.package-title {
    font-weight: 500;
}

/* Testimonials */
.rating {
    display: flex;
    align-items: center;
    gap: 0.25rem;
    margin-bottom: 0.75rem;
    color: #f59e0b;
}

.quote {
    margin: 0;
    font-style: italic;
}

.quote-role {
    margin-top: 0.75rem;
    font-size: 0.875rem;
    color: var(--muted);
}

/* Footer */
.site-footer {
    border-top: 1px solid var(--border);
    font-size: 0.875rem;
    color: var(--muted);
}

.footer-inner {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    justify-content: space-between;
    gap: 1rem;
    padding: 2.5rem 0;
}

@media (min-width: 768px) {
    .footer-inner {
        flex-direction: row;
        align-items: center;
    }
}

.footer-brand {
    font-weight: 500;
    color: var(--fg);
}

.footer-links {
    display: flex;
    gap: 1.5rem;
}

.footer-link {
    text-decoration: none;
}

.footer-link:hover {
    text-decoration: underline;
}

/* Floating call-to-action */
.floating-cta {
    position: fixed;
    right: 1rem;
    bottom: 1rem;
}

.floating-cta .btn {
    box-shadow: 0 10px 15px -3px rgba(15, 23, 42, 0.25);
}
"#;

/// Shown inside `<noscript>` so sections are visible when the reveal script never runs.
pub const NOSCRIPT_CSS: &str = ".reveal { opacity: 1; transform: none; }";

/// Content Security Policy for the page.
///
/// Scripts and styles are inline. Images may come from Unsplash.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https://images.unsplash.com; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";
