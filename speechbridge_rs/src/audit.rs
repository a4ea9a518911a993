//! Link audit for rendered pages.
//!
//! Scans the HTML produced by `render_site` and reports:
//! - fragment links (`href="#x"`) with no element `id="x"`
//! - ids that occur more than once
//! - placeholder links (`href="#"`) and a placeholder phone number
//!
//! Dangling anchors and duplicate ids make the page unsound. Placeholders only
//! block deployment.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use speechbridge_site::mailto::mailto_address;
use speechbridge_site::types::{PLACEHOLDER_HREF, PLACEHOLDER_PHONE_DIGIT};

static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\sid="([^"]*)""#).expect("valid id regex"));

static HREF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\shref="([^"]*)""#).expect("valid href regex"));

/// A placeholder href together with how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderLink {
    pub href: String,
    pub count: usize,
}

/// Findings for one rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Every element id, in document order
    pub ids: Vec<String>,
    /// Distinct fragment targets referenced by `href="#..."`
    pub anchors: BTreeSet<String>,
    pub dangling_anchors: Vec<String>,
    pub duplicate_ids: Vec<String>,
    pub placeholder_links: Vec<PlaceholderLink>,
    /// The `tel:` href, when it still contains placeholder digits
    pub placeholder_phone: Option<String>,
    /// Distinct addresses used by `mailto:` links
    pub mailto_addresses: BTreeSet<String>,
}

impl AuditReport {
    /// No dangling anchors and no duplicate ids.
    pub fn is_sound(&self) -> bool {
        self.dangling_anchors.is_empty() && self.duplicate_ids.is_empty()
    }

    /// Sound, and nothing left for the content author to fill in.
    pub fn is_deployable(&self) -> bool {
        self.is_sound() && self.placeholder_links.is_empty() && self.placeholder_phone.is_none()
    }

    /// Total number of placeholder hrefs on the page.
    pub fn placeholder_count(&self) -> usize {
        self.placeholder_links.iter().map(|p| p.count).sum()
    }
}

/// Audit rendered HTML.
pub fn audit_html(html: &str) -> AuditReport {
    let ids: Vec<String> = ID_RE
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect();

    let mut id_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for id in &ids {
        *id_counts.entry(id.as_str()).or_default() += 1;
    }
    let duplicate_ids = id_counts
        .iter()
        .filter(|(_, n)| **n > 1)
        .map(|(id, _)| id.to_string())
        .collect();

    let mut anchors = BTreeSet::new();
    let mut placeholders: BTreeMap<String, usize> = BTreeMap::new();
    let mut placeholder_phone = None;
    let mut mailto_addresses = BTreeSet::new();

    for cap in HREF_RE.captures_iter(html) {
        let href = &cap[1];
        if href.is_empty() || href == PLACEHOLDER_HREF {
            *placeholders.entry(href.to_string()).or_default() += 1;
        } else if let Some(fragment) = href.strip_prefix('#') {
            anchors.insert(fragment.to_string());
        } else if href.starts_with("tel:") {
            if href.contains(PLACEHOLDER_PHONE_DIGIT) {
                placeholder_phone = Some(href.to_string());
            }
        } else if let Some(address) = mailto_address(href) {
            mailto_addresses.insert(address.to_string());
        }
    }

    let dangling_anchors = anchors
        .iter()
        .filter(|a| !id_counts.contains_key(a.as_str()))
        .cloned()
        .collect();

    let placeholder_links = placeholders
        .into_iter()
        .map(|(href, count)| PlaceholderLink { href, count })
        .collect();

    AuditReport {
        ids,
        anchors,
        dangling_anchors,
        duplicate_ids,
        placeholder_links,
        placeholder_phone,
        mailto_addresses,
    }
}
