//! Reveal configuration context for the portfolio page.
//!
//! The configuration is parsed once from the command line and provided to
//! the component tree via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_reveal_config);
//!
//! // In child components
//! let config = use_reveal_config();
//! ```

use dioxus::prelude::*;
use portfolio_core::reveal::REVEAL_TAG;
use portfolio_core::RevealOptions;

/// How the page runs its reveal effect.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    /// Class name that tags reveal targets
    pub tag: String,
    /// Threshold and mode for each observation session
    pub options: RevealOptions,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            tag: REVEAL_TAG.to_string(),
            options: RevealOptions::default(),
        }
    }
}

/// Get the reveal configuration.
/// Uses the global config set from command line args.
pub fn get_reveal_config() -> RevealConfig {
    crate::get_reveal_config()
}

/// Hook to access the reveal configuration from context.
pub fn use_reveal_config() -> RevealConfig {
    use_context::<RevealConfig>()
}
