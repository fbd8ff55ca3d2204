//! Home page: the four résumé sections between header and footer.

use dioxus::prelude::*;
use portfolio_core::content::{
    ABOUT, ABOUT_TEXT, CONTACT, CONTACT_ITEMS, EXPERIENCE, PROJECTS, PROJECT_LIST, ROLES, SKILLS,
};
use portfolio_core::reveal::REVEAL_TAG;
use portfolio_ui::{Card, Icon, Pill, Section};

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "container",
            About {}
            Experience {}
            Projects {}
            Contact {}
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        Section { meta: ABOUT,
            Card {
                "{ABOUT_TEXT}"
                div { class: "pills",
                    for skill in SKILLS.iter() {
                        Pill { key: "{skill}", label: *skill }
                    }
                }
            }
        }
    }
}

#[component]
fn Experience() -> Element {
    rsx! {
        Section { meta: EXPERIENCE,
            div { class: "grid {REVEAL_TAG}",
                for role in ROLES.iter() {
                    Card { key: "{role.period}",
                        div { class: "job-title", "{role.title}" }
                        div { {role.summary_line()} }
                        ul {
                            for highlight in role.highlights.iter() {
                                li { "{highlight}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Projects() -> Element {
    rsx! {
        Section { meta: PROJECTS,
            div { class: "grid {REVEAL_TAG}",
                for project in PROJECT_LIST.iter() {
                    Card { key: "{project.title}",
                        div { class: "card-title", "{project.title}" }
                        p { "{project.blurb}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Contact() -> Element {
    rsx! {
        Section { meta: CONTACT,
            div { class: "contact-grid",
                for item in CONTACT_ITEMS.iter() {
                    div { key: "{item.label}", class: "contact-item",
                        Icon { kind: item.icon }
                        if let Some(href) = item.href {
                            a { href: href, "{item.label}" }
                        } else {
                            span { "{item.label}" }
                        }
                    }
                }
            }
        }
    }
}
