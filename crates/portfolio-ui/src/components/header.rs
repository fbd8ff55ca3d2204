//! Header Component
//!
//! Hero block: picture, name, tagline and social chips. Tagged for the
//! reveal effect like the sections below it.

use dioxus::prelude::*;
use portfolio_core::content::{Profile, SocialLink};
use portfolio_core::reveal::REVEAL_TAG;

use super::chip::Chip;

#[component]
pub fn Header(profile: Profile, links: &'static [SocialLink]) -> Element {
    rsx! {
        header { class: "container hero {REVEAL_TAG}",
            img {
                class: "profile-pic",
                src: profile.picture_url,
                alt: profile.picture_alt,
            }
            div { class: "name", "{profile.name}" }
            div { class: "tagline", "{profile.tagline}" }
            div { class: "links", "aria-label": "social links",
                for link in links.iter() {
                    Chip { key: "{link.class}", link: *link }
                }
            }
        }
    }
}
