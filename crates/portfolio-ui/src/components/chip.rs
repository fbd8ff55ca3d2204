//! Chip Component
//!
//! Round icon link with a hover tooltip, used for the social links in the
//! header.

use dioxus::prelude::*;
use portfolio_core::content::SocialLink;

use super::icons::Icon;

/// `target` attribute for a chip: web links open in a new tab.
pub fn link_target(link: &SocialLink) -> Option<&'static str> {
    link.opens_new_tab().then_some("_blank")
}

/// Full class list for a chip with an optional extra class.
pub fn chip_class(extra: &str) -> String {
    if extra.is_empty() {
        "chip".to_string()
    } else {
        format!("chip {}", extra)
    }
}

/// Icon link chip
///
/// # Design Notes
///
/// - Tooltip text comes from `data-tooltip` and is drawn in CSS
/// - `rel="noreferrer"` on every chip, `target="_blank"` only for http(s)
#[component]
pub fn Chip(link: SocialLink) -> Element {
    let class = chip_class(link.class);

    rsx! {
        a {
            class: "{class}",
            href: link.href,
            target: link_target(&link),
            rel: "noreferrer",
            "data-tooltip": link.tooltip,
            Icon { kind: link.icon }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use portfolio_core::content::{IconKind, SOCIAL_LINKS};

    fn link(href: &'static str) -> SocialLink {
        SocialLink {
            class: "",
            href,
            icon: IconKind::Globe,
            tooltip: "",
        }
    }

    #[test]
    fn http_links_open_new_tab() {
        assert_eq!(link_target(&link("https://github.com/omarsamiiii")), Some("_blank"));
        assert_eq!(link_target(&link("http://example.com")), Some("_blank"));
        assert_eq!(link_target(&link("mailto:someone@example.com")), None);
        assert_eq!(link_target(&link("#contact")), None);
    }

    #[test]
    fn mail_chip_stays_in_place() {
        let mail = SOCIAL_LINKS.iter().find(|l| l.class == "mail").unwrap();
        assert_eq!(link_target(mail), None);
    }

    #[test]
    fn chip_class_appends_extra() {
        assert_eq!(chip_class(""), "chip");
        assert_eq!(chip_class("github"), "chip github");
    }
}
