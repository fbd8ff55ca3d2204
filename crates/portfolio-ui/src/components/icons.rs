//! Inline SVG Icons
//!
//! Small 24x24 glyphs drawn in `currentColor`, so they pick up the color of
//! the link or row they sit in.

use dioxus::prelude::*;
use portfolio_core::content::IconKind;

const MAIL_PATH: &str = "M2 6a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v.51l-10 6.25L2 6.51V6Zm0 2.24V18a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8.24l-9.45 5.9a2 2 0 0 1-2.1 0L2 8.24Z";

const LINKEDIN_PATH: &str = "M4.98 3.5C4.98 4.88 3.87 6 2.5 6S0 4.88 0 3.5 1.12 1 2.5 1 4.98 2.12 4.98 3.5zM0 8h5v16H0V8zm7.5 0h4.8v2.2h.1c.7-1.3 2.5-2.7 5.1-2.7 5.5 0 6.5 3.6 6.5 8.2V24h-5v-7.1c0-1.7 0-3.9-2.4-3.9-2.4 0-2.8 1.9-2.8 3.8V24h-5V8z";

const GITHUB_PATH: &str = "M12 2C6.48 2 2 6.58 2 12.26c0 4.53 2.87 8.37 6.84 9.73.5.09.68-.22.68-.49 0-.24-.01-.87-.01-1.7-2.78.62-3.37-1.37-3.37-1.37-.46-1.2-1.12-1.52-1.12-1.52-.92-.64.07-.63.07-.63 1.02.07 1.55 1.07 1.55 1.07.9 1.58 2.36 1.12 2.94.86.09-.67.35-1.12.63-1.38-2.22-.26-4.56-1.14-4.56-5.05 0-1.12.39-2.03 1.03-2.75-.1-.26-.45-1.3.1-2.7 0 0 .85-.28 2.8 1.05a9.34 9.34 0 0 1 5.1 0c1.96-1.33 2.8-1.05 2.8-1.05.55 1.4.2 2.44.1 2.7.64.72 1.03 1.63 1.03 2.75 0 3.92-2.34 4.78-4.57 5.04.36.32.68.95.68 1.92 0 1.39-.01 2.51-.01 2.85 0 .27.18.59.69.49A10.05 10.05 0 0 0 22 12.26C22 6.58 17.52 2 12 2Z";

const GLOBE_PATH: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Zm6.93 6h-3.38c-.22-1.5-.63-2.86-1.16-3.9A8.03 8.03 0 0 1 18.93 8ZM12 4.07c.7 1.05 1.24 2.73 1.52 3.93H10.5c.28-1.2.82-2.88 1.5-3.93ZM4.44 16a7.97 7.97 0 0 1 0-8h3.54c-.18.95-.28 1.96-.28 3s.1 2.05.28 3H4.44Zm.63 2h3.38c.22 1.5.63 2.86 1.16 3.9A8.03 8.03 0 0 1 5.07 18ZM8.45 8H4.93a8.03 8.03 0 0 1 4.54-3.9C9.08 5.14 8.67 6.5 8.45 8ZM12 19.93c-.7-1.05-1.24-2.73-1.52-3.93h3.02c-.28 1.2-.82 2.88-1.5 3.93Zm1.48-5.93H10.5c-.18-.95-.28-1.96-.28-3s.1-2.05.28-3h2.98c.18.95.28 1.96.28 3s-.1 2.05-.28 3Zm1 .93h3.54a7.97 7.97 0 0 1 0 2h-3.54c.18-.95.28-1.96.28-3s-.1-2.05-.28-3ZM14.57 22c.53-1.04.94-2.4 1.16-3.9h3.38A8.03 8.03 0 0 1 14.57 22Z";

const PHONE_PATH: &str = "M6.62 10.79c1.44 2.83 3.76 5.15 6.59 6.59l2.2-2.2c.28-.28.67-.36 1.02-.25 1.12.37 2.33.57 3.57.57.55 0 1 .45 1 1V20c0 .55-.45 1-1 1-9.39 0-17-7.61-17-17 0-.55.45-1 1-1h3.5c.55 0 1 .45 1 1 0 1.25.2 2.45.57 3.57.11.35.03.74-.25 1.02l-2.2 2.2z";

const LOCATION_PATH: &str = "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z";

/// Path data for an icon, and whether it is drawn with an even-odd fill.
pub fn icon_path(kind: IconKind) -> (&'static str, bool) {
    match kind {
        IconKind::Mail => (MAIL_PATH, false),
        IconKind::LinkedIn => (LINKEDIN_PATH, false),
        IconKind::GitHub => (GITHUB_PATH, true),
        IconKind::Globe => (GLOBE_PATH, false),
        IconKind::Phone => (PHONE_PATH, false),
        IconKind::Location => (LOCATION_PATH, false),
    }
}

/// Decorative icon, hidden from assistive tech.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { kind: IconKind::Mail }
/// }
/// ```
#[component]
pub fn Icon(kind: IconKind) -> Element {
    let (d, even_odd) = icon_path(kind);

    rsx! {
        svg {
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            "focusable": "false",
            fill: "currentColor",
            if even_odd {
                path { "fill-rule": "evenodd", d: "{d}" }
            } else {
                path { d: "{d}" }
            }
        }
    }
}
