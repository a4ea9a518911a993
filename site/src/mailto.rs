//! `mailto:` and `tel:` href builders.

/// Build a `mailto:` href, percent-encoding the optional subject.
///
/// ```rust
/// use speechbridge_site::mailto::mailto;
///
/// assert_eq!(
///     mailto("hello@speechbridge.co.uk", Some("Dubai enquiry")),
///     "mailto:hello@speechbridge.co.uk?subject=Dubai%20enquiry"
/// );
/// ```
pub fn mailto(address: &str, subject: Option<&str>) -> String {
    match subject.map(str::trim).filter(|s| !s.is_empty()) {
        Some(subject) => format!(
            "mailto:{}?subject={}",
            address.trim(),
            urlencoding::encode(subject)
        ),
        None => format!("mailto:{}", address.trim()),
    }
}

/// Build a `tel:` href. Whitespace is dropped so "+44 20 7946 0000" dials.
pub fn tel(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

/// Address part of a `mailto:` href, without the query string.
pub fn mailto_address(href: &str) -> Option<&str> {
    let rest = href.strip_prefix("mailto:")?;
    let address = rest.split('?').next().unwrap_or(rest);
    (!address.is_empty()).then_some(address)
}
