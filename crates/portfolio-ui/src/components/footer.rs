//! Footer Component

use chrono::Datelike;
use dioxus::prelude::*;
use portfolio_core::content::{footer_prefix, GITHUB_URL};

#[component]
pub fn Footer() -> Element {
    let prefix = footer_prefix(chrono::Local::now().year());

    rsx! {
        footer {
            "{prefix}"
            a { class: "accent", href: GITHUB_URL, "GitHub" }
        }
    }
}
