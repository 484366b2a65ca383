//! Declarative description of a rendered slider.
//!
//! A [`Scene`] holds everything a renderer needs, with no tie to any
//! drawing API. The iced widget and the SVG exporter both consume it.

use serde::Serialize;

use crate::color::Rgb;
use crate::geometry::{ARC_PATH_DATA, Point, VIEW_BOX, ViewBox};
use crate::slider::{ArcSlider, SliderId};

/// Arc stroke width, in `em`.
pub const STROKE_WIDTH_EM: f32 = 0.25;

/// Thumb diameter, in `em`.
pub const THUMB_SIZE_EM: f32 = 1.25;

/// Fraction of the thumb covered by the colored inner disc.
pub const THUMB_INNER_RATIO: f32 = 0.68;

/// The whole slider, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub view_box: ViewBox,
    pub path: ArcPathNode,
    pub gradient: GradientNode,
    pub filter: InnerShadowNode,
    pub thumb: ThumbNode,
    pub input: RangeInputNode,
    pub label: String,
    pub disabled: bool,
}

/// Stroke cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
}

/// The arc track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcPathNode {
    pub data: &'static str,
    pub stroke_width_em: f32,
    pub line_cap: LineCap,
    pub gradient_id: String,
    pub filter_id: String,
}

/// A horizontal linear gradient spanning the view box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientNode {
    pub id: String,
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgb,
}

/// Inner shadow applied to the track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InnerShadowNode {
    pub id: String,
    pub dy: f32,
    pub std_deviation: f32,
    pub opacity: f32,
}

/// The draggable handle with its value bubble.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThumbNode {
    pub left_pct: f32,
    pub top_pct: f32,
    pub color: Rgb,
    pub text: String,
}

impl ThumbNode {
    /// Thumb center in view box coordinates.
    pub fn center(&self, view_box: &ViewBox) -> Point {
        Point::new(
            view_box.min_x + self.left_pct * view_box.width / 100.0,
            view_box.min_y + self.top_pct * view_box.height / 100.0,
        )
    }
}

/// The linear range input backing the arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeInputNode {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
    pub disabled: bool,
}

impl ArcSlider {
    /// Describe the slider as it should currently be drawn.
    pub fn scene(&self) -> Scene {
        let id = self.id();
        let range = self.range();
        let thumb = self.thumb();
        let gradient_id = element_id(id, "gradient");
        let filter_id = element_id(id, "shadow");

        let stops = self
            .color_stops()
            .iter()
            .map(|(offset, color)| GradientStop { offset, color })
            .collect();

        Scene {
            view_box: VIEW_BOX,
            path: ArcPathNode {
                data: ARC_PATH_DATA,
                stroke_width_em: STROKE_WIDTH_EM,
                line_cap: LineCap::Round,
                gradient_id: gradient_id.clone(),
                filter_id: filter_id.clone(),
            },
            gradient: GradientNode {
                id: gradient_id,
                start: Point::new(VIEW_BOX.min_x, 0.0),
                end: Point::new(VIEW_BOX.min_x + VIEW_BOX.width, 0.0),
                stops,
            },
            filter: InnerShadowNode {
                id: filter_id,
                dy: 1.0,
                std_deviation: 0.5,
                opacity: 0.25,
            },
            thumb: ThumbNode {
                left_pct: thumb.offset.left_pct,
                top_pct: thumb.offset.top_pct,
                color: thumb.color,
                text: self.display_value(),
            },
            input: RangeInputNode {
                min: range.min(),
                max: range.max(),
                step: range.step(),
                value: self.value(),
                disabled: self.is_disabled(),
            },
            label: self.label().to_string(),
            disabled: self.is_disabled(),
        }
    }
}

/// Markup id for one of a slider's definitions.
///
/// Slider ids are free-form, so anything outside `[A-Za-z0-9_-]` becomes `-`.
fn element_id(id: &SliderId, suffix: &str) -> String {
    let id: String = id
        .as_str()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("arc-slider-{}-{}", id, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::STOP_COUNT;
    use crate::config::SliderConfig;

    #[test]
    fn test_scene_reflects_slider() {
        let slider = ArcSlider::new(
            SliderConfig::default()
                .with_id("s1")
                .with_value(25.0)
                .with_label("Volume"),
        )
        .unwrap();

        let scene = slider.scene();

        assert_eq!(scene.view_box, VIEW_BOX);
        assert_eq!(scene.path.gradient_id, scene.gradient.id);
        assert_eq!(scene.path.filter_id, scene.filter.id);
        assert_eq!(scene.gradient.stops.len(), STOP_COUNT);
        assert_eq!(scene.gradient.stops[0].offset, 0.0);
        assert_eq!(scene.gradient.stops[STOP_COUNT - 1].offset, 1.0);
        assert_eq!(scene.gradient.stops[0].color, Rgb::new(0xFF, 0x11, 0x22));
        assert_eq!(scene.thumb.text, "25");
        assert_eq!(scene.thumb.color, slider.thumb().color);
        assert_eq!(scene.input.value, 25.0);
        assert_eq!(scene.label, "Volume");
    }

    #[test]
    fn test_thumb_center_is_on_arc() {
        let slider = ArcSlider::new(SliderConfig::default().with_value(0.0)).unwrap();
        let center = slider.scene().thumb.center(&VIEW_BOX);

        assert!((center.x - 2.0).abs() < 0.01);
        assert!((center.y - 34.0).abs() < 0.01);
    }

    #[test]
    fn test_element_ids_are_sanitized() {
        let slider = ArcSlider::new(SliderConfig::default().with_id("a\"b c")).unwrap();
        let scene = slider.scene();

        assert_eq!(scene.gradient.id, "arc-slider-a-b-c-gradient");
        assert_eq!(scene.filter.id, "arc-slider-a-b-c-shadow");
        assert_eq!(scene.path.gradient_id, scene.gradient.id);
    }
}
