//! Navigation Bar Component
//!
//! Sticky bar with in-page anchors to each section.

use dioxus::prelude::*;
use portfolio_core::content::NavLink;

/// Top navigation bar.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Nav { links: NAV_LINKS }
/// }
/// ```
#[component]
pub fn Nav(links: &'static [NavLink]) -> Element {
    rsx! {
        nav { class: "nav",
            div { class: "container nav-inner",
                for link in links.iter() {
                    a { key: "{link.anchor}", href: link.href(), "{link.label}" }
                }
            }
        }
    }
}
