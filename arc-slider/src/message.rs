use arc_slider_core::{PointerTarget, Rect, SliderId};

/// Messages for the storybook application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer interaction on an arc slider.
    Slider(SliderId, SliderEvent),

    /// The linear range input of a slider moved.
    InputChanged(SliderId, f64),

    /// User selected a story from the sidebar.
    SelectStory(usize),

    /// User edited the external value field.
    ExternalValueChanged(String),

    /// Apply the external value to the selected slider.
    ApplyExternalValue,

    /// Log the selected slider as SVG markup.
    ExportSvg,

    /// Switch between the dark and light theme.
    ToggleTheme,
}

/// Pointer events published by the arc slider canvas.
///
/// Coordinates are absolute; `path_bounds` is the arc's bounding box
/// in the same space.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderEvent {
    PointerDown {
        x: f32,
        path_bounds: Rect,
        target: PointerTarget,
    },
    PointerMove {
        x: f32,
        path_bounds: Rect,
    },
    PointerUp,
}
