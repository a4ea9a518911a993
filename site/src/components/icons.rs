//! Inline SVG icons.
//!
//! Outline icons on a 24x24 grid, drawn with `currentColor` so they follow
//! the text colour of whatever contains them.

use leptos::prelude::*;

use crate::types::PathIcon;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `class` - CSS classes (default: "icon")
/// * `fill` - Fill colour (default: "none", outline only)
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MAIL class="icon-sm" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// CSS class names
    #[prop(default = "icon")]
    class: &'static str,
    /// Fill colour (CSS colour value)
    #[prop(default = "none")]
    fill: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Icon path for a service card.
pub fn path_icon(icon: PathIcon) -> &'static str {
    match icon {
        PathIcon::Family => ICON_BABY,
        PathIcon::School => ICON_SCHOOL,
        PathIcon::Professional => ICON_GRADUATION_CAP,
    }
}

// =============================================================================
// Outline icons (24x24)
// =============================================================================

/// Envelope
pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z M22 6l-10 7L2 6";

/// Telephone handset
pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z";

/// Document with text lines
pub const ICON_FILE_TEXT: &str = "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z M14 2v6h6 M16 13H8 M16 17H8 M10 9H8";

/// Calendar page
pub const ICON_CALENDAR: &str = "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z M16 2v4 M8 2v4 M3 10h18";

/// Five-point star (rating)
pub const ICON_STAR: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

/// Circle with a check mark
pub const ICON_CHECK_CIRCLE: &str = "M22 11.08V12a10 10 0 1 1-5.93-9.14 M22 4L12 14.01l-3-3";

/// Baby face (families)
pub const ICON_BABY: &str = "M9 12h.01 M15 12h.01 M10 16c.5.3 1.2.5 2 .5s1.5-.2 2-.5 M19 6.3a9 9 0 0 1 1.8 3.9 2 2 0 0 1 0 3.6 9 9 0 0 1-17.6 0 2 2 0 0 1 0-3.6A9 9 0 0 1 12 3c2 0 3.5 1.1 3.5 2.5s-.9 2.5-2 2.5c-.8 0-1.5-.4-1.5-1";

/// School building (schools and nurseries)
pub const ICON_SCHOOL: &str = "M14 22v-4a2 2 0 1 0-4 0v4 M18 10l4 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-8l4-2 M18 5v17 M4 6l8-4 8 4 M6 5v17";

/// Mortarboard (professionals)
pub const ICON_GRADUATION_CAP: &str = "M22 10L12 5 2 10l10 5 10-5z M6 12v5c3 3 9 3 12 0v-5";
