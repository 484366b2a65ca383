//! Arc Slider Core Library
//!
//! This crate provides the renderer-independent model of an arc-shaped range slider:
//!
//! - [`color`] - Color parsing and gradient interpolation
//! - [`geometry`] - Arc path geometry and position mapping
//! - [`range`] - Value bounds, stepping and progress conversion
//! - [`slider`] - The slider state machine (`ArcSlider`)
//! - [`registry`] - Registry for setting values on sliders by id
//! - [`scene`] - Declarative scene description of a rendered slider
//! - [`svg`] - SVG markup export
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`error`] - Error types

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod range;
pub mod registry;
pub mod scene;
pub mod slider;
pub mod svg;

// Re-export commonly used types at the crate root
pub use color::{ColorFormat, ColorStops, Rgb, detect_format, intermediate_colors, parse_color};
pub use config::{LogFormat, LoggingConfig, SliderConfig, load_config, parse_config};
pub use error::{Error, Result};
pub use geometry::{PathGeometry, Point, Rect, Size, ThumbOffset, VIEW_BOX, ViewBox};
pub use range::ValueRange;
pub use registry::SliderRegistry;
pub use scene::Scene;
pub use slider::{
    ArcSlider, ChangeEvent, ChangeOrigin, Interaction, PointerTarget, SliderId, ThumbState,
};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
///
/// # Example
///
/// ```ignore
/// use arc_slider_core::{LoggingConfig, LogFormat, init_tracing};
///
/// let config = LoggingConfig {
///     level: "debug".to_string(),
///     format: LogFormat::Json,
/// };
/// init_tracing(&config)?;
/// ```
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
