//! Section, Card and Pill Components
//!
//! Building blocks for the page body. Sections are reveal targets; cards and
//! pills are plain containers.

use dioxus::prelude::*;
use portfolio_core::content::SectionMeta;
use portfolio_core::reveal::REVEAL_TAG;

/// Class list for a section: the reveal tag plus an optional stagger step.
pub fn section_class(delay: u8) -> String {
    if delay == 0 {
        REVEAL_TAG.to_string()
    } else {
        format!("{} delay-{}", REVEAL_TAG, delay)
    }
}

/// Anchored page section with kicker and title
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Section { meta: ABOUT,
///         Card { "..." }
///     }
/// }
/// ```
#[component]
pub fn Section(meta: SectionMeta, children: Element) -> Element {
    let class = section_class(meta.delay);

    rsx! {
        section { id: meta.id, class: "{class}",
            div { class: "kicker", "{meta.kicker}" }
            h2 { "{meta.title}" }
            {children}
        }
    }
}

#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        div { class: "card", {children} }
    }
}

/// Small rounded label, e.g. a skill
#[component]
pub fn Pill(label: &'static str) -> Element {
    rsx! {
        span { class: "pill", "{label}" }
    }
}
