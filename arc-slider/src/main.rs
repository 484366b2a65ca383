//! Arc slider storybook.
//!
//! Shows each configured slider story and lets the user drag, set values
//! from the host side and export SVG markup.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use iced::application;

use arc_slider::{Storybook, StorybookConfig};
use arc_slider_core::init_tracing;

/// Arc slider storybook.
#[derive(Parser, Debug)]
#[command(name = "arc-slider-storybook")]
#[command(about = "Interactive storybook for the arc slider widget")]
#[command(version)]
struct Args {
    /// Path to configuration file (JSON5 format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => StorybookConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => StorybookConfig::load_default().context("Failed to load default config")?,
    };

    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    init_tracing(&config.logging)?;

    tracing::info!(stories = config.stories.len(), "Starting arc slider storybook");

    application(
        move || Storybook::boot(config.clone()),
        Storybook::update,
        Storybook::view,
    )
    .title(Storybook::title)
    .theme(Storybook::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
