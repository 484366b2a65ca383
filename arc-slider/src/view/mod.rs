//! View components for the arc slider storybook.

pub mod arc_slider;
pub mod storybook;
pub mod theme;
