//! The arc slider state machine.
//!
//! Every value change, whatever its source, goes through
//! [`ArcSlider::update_position`] so the thumb position, thumb color,
//! range-input value and displayed text never disagree.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{ColorStops, Rgb, parse_color};
use crate::config::SliderConfig;
use crate::error::Result;
use crate::geometry::{
    PathGeometry, Rect, Size, ThumbOffset, VIEW_BOX, clamp_progress, progress_from_pointer,
    thumb_offset,
};
use crate::range::ValueRange;

/// Length of generated slider identifiers.
const GENERATED_ID_LEN: usize = 9;

/// Identifier of a slider instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliderId(String);

impl SliderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random base-36 identifier.
    pub fn random() -> Self {
        const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        let mut rng = rand::rng();
        let id = (0..GENERATED_ID_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect::<String>();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SliderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SliderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// What caused a value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOrigin {
    /// Initial placement, or re-placement after a configuration change.
    Init,
    /// Pointer or range-input interaction.
    User,
    /// Value set by host code or through the registry.
    External,
}

impl fmt::Display for ChangeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeOrigin::Init => write!(f, "init"),
            ChangeOrigin::User => write!(f, "user"),
            ChangeOrigin::External => write!(f, "external"),
        }
    }
}

/// Emitted for every accepted value change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub id: SliderId,
    pub value: f64,
    pub origin: ChangeOrigin,
}

impl ChangeEvent {
    /// JSON form of the event (`{"id":..,"value":..,"origin":..}`).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Pointer interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging,
}

/// Element a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The draggable handle; pressing it does not move the value.
    Thumb,
    /// The arc itself; pressing it jumps to the pointer position.
    Path,
}

/// Rendering state of the thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbState {
    pub progress: f64,
    pub offset: ThumbOffset,
    pub color: Rgb,
}

/// An arc-shaped range slider.
#[derive(Debug, Clone)]
pub struct ArcSlider {
    id: SliderId,
    range: ValueRange,
    color1: Rgb,
    color2: Rgb,
    stops: ColorStops,
    disabled: bool,
    label: String,
    value: f64,
    thumb: ThumbState,
    interaction: Interaction,
    last_origin: ChangeOrigin,
    geometry: &'static PathGeometry,
    rendered_size: Size,
}

impl ArcSlider {
    /// Build a slider from its configuration and place the thumb.
    ///
    /// Fails on an invalid range, step or color.
    pub fn new(config: SliderConfig) -> Result<Self> {
        let range = ValueRange::new(config.min_range, config.max_range, config.step)?;
        let color1 = parse_color(&config.color1)?;
        let color2 = parse_color(&config.color2)?;
        let id = config.id.map(SliderId::from).unwrap_or_else(SliderId::random);

        let initial = match config.arc_value {
            Some(value) if range.contains(value) => value,
            Some(value) => {
                tracing::warn!(
                    slider = %id,
                    value,
                    min = range.min(),
                    max = range.max(),
                    "Initial value out of range, clamping"
                );
                if value.is_nan() {
                    range.midpoint()
                } else {
                    value.clamp(range.min(), range.max())
                }
            }
            None => range.midpoint(),
        };

        let mut slider = Self {
            id,
            range,
            color1,
            color2,
            stops: ColorStops::new(color1, color2),
            disabled: config.disabled,
            label: config.label,
            value: initial,
            thumb: ThumbState {
                progress: 0.0,
                offset: ThumbOffset::default(),
                color: color1,
            },
            interaction: Interaction::Idle,
            last_origin: ChangeOrigin::Init,
            geometry: PathGeometry::arc(),
            rendered_size: VIEW_BOX.size(),
        };

        slider.update_position(range.progress_of(initial), ChangeOrigin::Init);
        tracing::debug!(slider = %slider.id, value = slider.value, "Slider created");

        Ok(slider)
    }

    pub fn id(&self) -> &SliderId {
        &self.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current value formatted for display.
    pub fn display_value(&self) -> String {
        self.range.format(self.value)
    }

    pub fn progress(&self) -> f64 {
        self.thumb.progress
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Half the width of the value range.
    pub fn middle_range(&self) -> f64 {
        self.range.middle_range()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction == Interaction::Dragging
    }

    pub fn last_origin(&self) -> ChangeOrigin {
        self.last_origin
    }

    pub fn thumb(&self) -> ThumbState {
        self.thumb
    }

    pub fn color_stops(&self) -> &ColorStops {
        &self.stops
    }

    pub fn colors(&self) -> (Rgb, Rgb) {
        (self.color1, self.color2)
    }

    pub fn geometry(&self) -> &'static PathGeometry {
        self.geometry
    }

    /// Bounding box of the arc path once drawn into `rendered`.
    pub fn path_bounds_in(&self, rendered: Rect) -> Rect {
        VIEW_BOX.map_rect(self.geometry.bounds(), rendered)
    }

    /// Record the pixel size the slider is drawn at.
    pub fn set_rendered_size(&mut self, size: Size) {
        if self.rendered_size != size {
            self.rendered_size = size;
            self.place_thumb(self.thumb.progress);
        }
    }

    /// Move the thumb to `progress` and derive the value from it.
    ///
    /// Returns a change event when a user or external change altered the value.
    pub fn update_position(&mut self, progress: f64, origin: ChangeOrigin) -> Option<ChangeEvent> {
        let progress = clamp_progress(progress);
        let previous = self.value;

        self.place_thumb(progress);
        self.value = self.range.value_at(progress);
        self.last_origin = origin;

        if origin == ChangeOrigin::Init || previous == self.value {
            return None;
        }

        tracing::debug!(
            slider = %self.id,
            value = self.value,
            origin = %origin,
            "Slider value changed"
        );

        Some(ChangeEvent {
            id: self.id.clone(),
            value: self.value,
            origin,
        })
    }

    /// Start a drag. Pressing the path (not the thumb) jumps to the pointer.
    pub fn pointer_down(
        &mut self,
        pointer_x: f32,
        path_bounds: Rect,
        target: PointerTarget,
    ) -> Option<ChangeEvent> {
        if self.disabled {
            return None;
        }

        self.interaction = Interaction::Dragging;

        match target {
            PointerTarget::Thumb => None,
            PointerTarget::Path => self.update_position(
                progress_from_pointer(pointer_x, path_bounds),
                ChangeOrigin::User,
            ),
        }
    }

    /// Follow the pointer while dragging; ignored when idle.
    pub fn pointer_move(&mut self, pointer_x: f32, path_bounds: Rect) -> Option<ChangeEvent> {
        if self.interaction != Interaction::Dragging {
            return None;
        }

        let progress = progress_from_pointer(pointer_x, path_bounds);
        tracing::trace!(slider = %self.id, progress, "Pointer moved");
        self.update_position(progress, ChangeOrigin::User)
    }

    /// End a drag. Returns whether a drag was in progress.
    pub fn pointer_up(&mut self) -> bool {
        std::mem::replace(&mut self.interaction, Interaction::Idle) == Interaction::Dragging
    }

    /// The linear range input changed to `raw`.
    pub fn input_changed(&mut self, raw: f64) -> Option<ChangeEvent> {
        if self.disabled || !raw.is_finite() {
            return None;
        }
        self.update_position(self.range.progress_of(raw), ChangeOrigin::User)
    }

    /// Set the value from host code.
    ///
    /// Values outside the range are rejected and the current value is kept.
    pub fn set_value(&mut self, value: f64) -> Option<ChangeEvent> {
        if !value.is_finite() || !self.range.contains(value) {
            tracing::warn!(
                slider = %self.id,
                value,
                current = self.value,
                "Rejected out of range value"
            );
            return None;
        }

        if value == self.value {
            return None;
        }

        self.update_position(self.range.progress_of(value), ChangeOrigin::External)
    }

    /// Change the bounds. A value that falls outside is clamped and reported.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<Option<ChangeEvent>> {
        self.reconfigure_range(ValueRange::new(min, max, self.range.step())?)
    }

    /// Change the value increment, snapping the current value to it.
    pub fn set_step(&mut self, step: f64) -> Result<Option<ChangeEvent>> {
        self.reconfigure_range(ValueRange::new(self.range.min(), self.range.max(), step)?)
    }

    fn reconfigure_range(&mut self, range: ValueRange) -> Result<Option<ChangeEvent>> {
        let previous = self.value;
        self.range = range;

        let progress = range.progress_of(previous);
        self.update_position(progress, ChangeOrigin::Init);

        if self.value == previous {
            return Ok(None);
        }

        tracing::debug!(
            slider = %self.id,
            previous,
            value = self.value,
            "Value adjusted to new range"
        );

        self.last_origin = ChangeOrigin::External;
        Ok(Some(ChangeEvent {
            id: self.id.clone(),
            value: self.value,
            origin: ChangeOrigin::External,
        }))
    }

    /// Replace the gradient colors and recolor the thumb.
    pub fn set_colors(&mut self, color1: &str, color2: &str) -> Result<()> {
        let from = parse_color(color1)?;
        let to = parse_color(color2)?;

        self.color1 = from;
        self.color2 = to;
        self.stops = ColorStops::new(from, to);
        self.thumb.color = self.stops.color_at(self.thumb.progress);
        Ok(())
    }

    /// Enable or disable interaction. Disabling ends any drag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.interaction = Interaction::Idle;
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    fn place_thumb(&mut self, progress: f64) {
        let point = self.geometry.point_at_progress(progress);
        self.thumb = ThumbState {
            progress,
            offset: thumb_offset(point, VIEW_BOX, self.rendered_size),
            color: self.stops.color_at(progress),
        };
    }
}
