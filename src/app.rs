use dioxus::prelude::*;
use portfolio_core::content::{NAV_LINKS, PROFILE, SOCIAL_LINKS};
use portfolio_ui::{Footer, Header, Nav};

use crate::context::{get_reveal_config, use_reveal_config, RevealConfig};
use crate::pages::Home;
use crate::reveal::use_reveal;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the reveal configuration, renders the page and
/// runs the reveal controller over it.
#[component]
pub fn App() -> Element {
    use_context_provider(get_reveal_config);
    let config: RevealConfig = use_reveal_config();

    // Discovery runs after this first render is committed.
    use_reveal(config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Nav { links: NAV_LINKS }
        Header { profile: PROFILE, links: SOCIAL_LINKS }
        Home {}
        Footer {}
    }
}
