//! Arc Slider - an iced canvas widget for the arc slider, plus a storybook
//! application for trying it out.
//!
//! This library exposes the widget and the storybook for testing.

pub mod app;
pub mod config;
pub mod message;
pub mod view;

// Re-export commonly used types
pub use app::Storybook;
pub use config::{AppTheme, StorybookConfig};
pub use message::{Message, SliderEvent};
pub use view::arc_slider::{ArcSliderStyle, ArcSliderWidget};
