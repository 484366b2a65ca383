use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Configuration of a single arc slider.
///
/// Keys use the kebab-case attribute names (`min-range`, `arc-value`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SliderConfig {
    /// Unique identifier; a random one is generated when absent.
    #[serde(default)]
    pub id: Option<String>,

    /// Lower bound of the value.
    #[serde(default = "default_min_range")]
    pub min_range: f64,

    /// Upper bound of the value.
    #[serde(default = "default_max_range")]
    pub max_range: f64,

    /// Initial value; defaults to the middle of the range.
    #[serde(default)]
    pub arc_value: Option<f64>,

    /// Value increment.
    #[serde(default = "default_step")]
    pub step: f64,

    /// Gradient start color (hex or `rgb()`).
    #[serde(default = "default_color1")]
    pub color1: String,

    /// Gradient end color (hex or `rgb()`).
    #[serde(default = "default_color2")]
    pub color2: String,

    /// Whether user interaction is ignored.
    #[serde(default)]
    pub disabled: bool,

    /// Text shown next to the slider.
    #[serde(default)]
    pub label: String,
}

fn default_min_range() -> f64 {
    0.0
}

fn default_max_range() -> f64 {
    100.0
}

fn default_step() -> f64 {
    1.0
}

fn default_color1() -> String {
    "#FF1122".to_string()
}

fn default_color2() -> String {
    "#1122FF".to_string()
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            id: None,
            min_range: default_min_range(),
            max_range: default_max_range(),
            arc_value: None,
            step: default_step(),
            color1: default_color1(),
            color2: default_color2(),
            disabled: false,
            label: String::new(),
        }
    }
}

impl SliderConfig {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min_range = min;
        self.max_range = max;
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.arc_value = Some(value);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_colors(mut self, color1: impl Into<String>, color2: impl Into<String>) -> Self {
        self.color1 = color1.into();
        self.color2 = color2.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Common logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Load a configuration file in JSON5 format.
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    json5::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a configuration from a JSON5 string.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    json5::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
}
