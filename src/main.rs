#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod reveal;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::reveal::REVEAL_TAG;
use portfolio_core::{RevealMode, RevealOptions, Threshold};
use tracing_subscriber::EnvFilter;

use crate::context::RevealConfig;

/// Global reveal configuration, set from command line
static REVEAL_CONFIG: OnceLock<RevealConfig> = OnceLock::new();

/// Get the reveal configuration (set from command line or default)
pub fn get_reveal_config() -> RevealConfig {
    REVEAL_CONFIG.get().cloned().unwrap_or_default()
}

/// Portfolio - personal résumé page
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Portfolio - personal résumé page with scroll reveal")]
struct Args {
    /// Reveal mode: "once" reveals each element the first time it scrolls
    /// into view, "toggle" hides it again when it leaves
    #[arg(short, long, default_value = "once")]
    mode: RevealMode,

    /// Fraction of an element (0.0 to 1.0) that must be visible to reveal it
    #[arg(short, long, default_value = "0.1")]
    threshold: Threshold,

    /// Class name that tags elements for the reveal effect
    #[arg(long, default_value = REVEAL_TAG)]
    tag: String,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "portfolio_core=trace"
    #[arg(long)]
    log_level: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 960.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

impl Args {
    fn reveal_config(&self) -> RevealConfig {
        RevealConfig {
            tag: self.tag.clone(),
            options: RevealOptions::new(self.threshold, self.mode),
        }
    }
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let config = args.reveal_config();
    tracing::info!(
        "Starting portfolio: reveal mode={} threshold={} tag={}",
        config.options.mode,
        config.options.threshold.value(),
        config.tag
    );

    // Store reveal configuration globally
    let _ = REVEAL_CONFIG.set(config);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Omar El-Masry \u{2014} Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
