//! Storybook configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use arc_slider_core::{LoggingConfig, SliderConfig, load_config};

/// Color scheme of the storybook chrome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTheme {
    #[default]
    Dark,
    Light,
}

impl AppTheme {
    pub fn toggled(self) -> Self {
        match self {
            AppTheme::Dark => AppTheme::Light,
            AppTheme::Light => AppTheme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppTheme::Dark => "Dark",
            AppTheme::Light => "Light",
        }
    }
}

/// One storybook entry: a named slider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryConfig {
    pub name: String,
    #[serde(default)]
    pub slider: SliderConfig,
}

impl StoryConfig {
    pub fn new(name: impl Into<String>, slider: SliderConfig) -> Self {
        Self {
            name: name.into(),
            slider,
        }
    }
}

/// Top-level storybook configuration (JSON5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorybookConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub theme: AppTheme,

    #[serde(default = "default_stories")]
    pub stories: Vec<StoryConfig>,
}

impl Default for StorybookConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            theme: AppTheme::default(),
            stories: default_stories(),
        }
    }
}

/// Built-in stories.
pub fn default_stories() -> Vec<StoryConfig> {
    vec![
        StoryConfig::new(
            "Regular",
            SliderConfig::default()
                .with_id("regular")
                .with_label("Regular"),
        ),
        StoryConfig::new(
            "Custom colors",
            SliderConfig::default()
                .with_id("custom-colors")
                .with_colors("#22CC88", "rgb(255, 200, 0)")
                .with_label("Custom colors"),
        ),
        StoryConfig::new(
            "Custom range",
            SliderConfig::default()
                .with_id("custom-range")
                .with_range(-40.0, 40.0)
                .with_step(5.0)
                .with_value(10.0)
                .with_label("Temperature"),
        ),
        StoryConfig::new(
            "Disabled",
            SliderConfig::default()
                .with_id("disabled")
                .with_value(30.0)
                .with_label("Disabled")
                .disabled(true),
        ),
    ]
}

/// Default location of the storybook configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("arc-slider").join("storybook.json5"))
}

impl StorybookConfig {
    /// Load from `path`.
    pub fn load(path: impl AsRef<Path>) -> arc_slider_core::Result<Self> {
        load_config(path)
    }

    /// Load from the default location, falling back to built-in stories.
    pub fn load_default() -> arc_slider_core::Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "Loading storybook configuration");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arc_slider_core::{LogFormat, parse_config};

    #[test]
    fn test_parse_storybook_config() {
        let json5 = r#"
        {
            logging: { level: "debug", format: "json" },
            theme: "light",
            stories: [
                { name: "Volume", slider: { id: "volume", "max-range": 11 } },
                { name: "Plain" },
            ],
        }
        "#;

        let config: StorybookConfig = parse_config(json5).unwrap();

        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.theme, AppTheme::Light);
        assert_eq!(config.stories.len(), 2);
        assert_eq!(config.stories[0].slider.max_range, 11.0);
        assert_eq!(config.stories[1].slider, SliderConfig::default());
    }

    #[test]
    fn test_empty_config_uses_builtin_stories() {
        let config: StorybookConfig = parse_config("{}").unwrap();

        assert_eq!(config, StorybookConfig::default());
        assert_eq!(config.stories.len(), 4);
        assert_eq!(config.theme, AppTheme::Dark);
    }

    #[test]
    fn test_builtin_stories_are_valid() {
        for story in default_stories() {
            assert!(
                arc_slider_core::ArcSlider::new(story.slider).is_ok(),
                "story {} should build",
                story.name
            );
        }
    }

    #[test]
    fn test_builtin_story_variants() {
        let stories = default_stories();
        let names: Vec<&str> = stories.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(
            names,
            ["Regular", "Custom colors", "Custom range", "Disabled"]
        );
        assert_ne!(stories[1].slider.color1, SliderConfig::default().color1);
        assert!(stories[2].slider.min_range < 0.0);
        assert!(stories[3].slider.disabled);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(AppTheme::Dark.toggled(), AppTheme::Light);
        assert_eq!(AppTheme::Light.toggled().label(), "Dark");
    }
}
