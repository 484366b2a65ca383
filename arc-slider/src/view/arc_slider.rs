//! Canvas-based arc slider widget.

use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

use arc_slider_core::geometry::{ARC_START, ARC_SEGMENTS, Segment};
use arc_slider_core::scene::{STROKE_WIDTH_EM, THUMB_INNER_RATIO, THUMB_SIZE_EM};
use arc_slider_core::{ArcSlider, PointerTarget, Rect, Rgb, Scene, VIEW_BOX};

use crate::message::{Message, SliderEvent};

/// Extra pixels around the track that still count as a hit.
const HIT_SLOP: f32 = 4.0;

/// Pixel metrics of the arc slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSliderStyle {
    /// Width of the arc's view box once drawn.
    pub arc_width: f32,
    /// Base font size; track and thumb sizes are relative to it.
    pub font_size: f32,
    /// Height reserved above the arc for the value bubble.
    pub bubble_height: f32,
    pub bubble_color: Color,
    pub bubble_text_color: Color,
    pub thumb_ring_color: Color,
}

impl Default for ArcSliderStyle {
    fn default() -> Self {
        Self {
            arc_width: 360.0,
            font_size: 16.0,
            bubble_height: 30.0,
            bubble_color: Color::from_rgb8(0x2B, 0x2D, 0x33),
            bubble_text_color: Color::WHITE,
            thumb_ring_color: Color::from_rgb8(0xF4, 0xF4, 0xF6),
        }
    }
}

impl ArcSliderStyle {
    fn scale(&self) -> f32 {
        self.arc_width / VIEW_BOX.width
    }

    /// Track thickness in pixels. The stroke does not scale with the arc.
    pub fn track_width(&self) -> f32 {
        STROKE_WIDTH_EM * self.font_size
    }

    pub fn thumb_radius(&self) -> f32 {
        THUMB_SIZE_EM * self.font_size / 2.0
    }

    fn padding(&self) -> f32 {
        self.thumb_radius() + HIT_SLOP
    }

    /// Area the view box is drawn into, in canvas-local pixels.
    pub fn arc_rect(&self) -> Rect {
        let padding = self.padding();
        Rect::new(
            padding,
            self.bubble_height + padding,
            self.arc_width,
            self.arc_width * VIEW_BOX.height / VIEW_BOX.width,
        )
    }

    /// Size of the whole canvas.
    pub fn canvas_size(&self) -> Size {
        let rect = self.arc_rect();
        Size::new(
            rect.width + 2.0 * self.padding(),
            rect.y + rect.height + self.padding(),
        )
    }
}

/// Interactive arc slider.
pub struct ArcSliderWidget;

impl ArcSliderWidget {
    /// Create the canvas element for `slider`.
    pub fn new(slider: &ArcSlider, style: ArcSliderStyle) -> Element<'_, Message> {
        let size = style.canvas_size();
        Canvas::new(ArcSliderProgram { slider, style })
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .into()
    }
}

struct ArcSliderProgram<'a> {
    slider: &'a ArcSlider,
    style: ArcSliderStyle,
}

impl<'a> canvas::Program<Message> for ArcSliderProgram<'a> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            canvas::Event::Mouse(mouse_event) => self.handle_mouse(mouse_event, bounds, cursor),
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        self.draw_slider(&mut frame, &self.slider.scene());
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.slider.is_dragging() {
            return mouse::Interaction::Grabbing;
        }

        let Some(local) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };

        match hit_test(self.slider, &self.style, local) {
            Some(_) if self.slider.is_disabled() => mouse::Interaction::NotAllowed,
            Some(PointerTarget::Thumb) => mouse::Interaction::Grab,
            Some(PointerTarget::Path) => mouse::Interaction::Pointer,
            None => mouse::Interaction::default(),
        }
    }
}

impl<'a> ArcSliderProgram<'a> {
    fn handle_mouse(
        &self,
        event: &mouse::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let id = self.slider.id().clone();
        let path_bounds = self.slider.path_bounds_in(self.style.arc_rect());

        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if self.slider.is_disabled() {
                    return None;
                }
                let local = cursor.position_in(bounds)?;
                let target = hit_test(self.slider, &self.style, local)?;

                Some(canvas::Action::publish(Message::Slider(
                    id,
                    SliderEvent::PointerDown {
                        x: local.x,
                        path_bounds,
                        target,
                    },
                )))
            }
            mouse::Event::CursorMoved { position } if self.slider.is_dragging() => {
                // Keep following the pointer after it leaves the canvas
                Some(canvas::Action::publish(Message::Slider(
                    id,
                    SliderEvent::PointerMove {
                        x: position.x - bounds.x,
                        path_bounds,
                    },
                )))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft
                if self.slider.is_dragging() =>
            {
                Some(canvas::Action::publish(Message::Slider(
                    id,
                    SliderEvent::PointerUp,
                )))
            }
            _ => None,
        }
    }

    fn draw_slider(&self, frame: &mut Frame, scene: &Scene) {
        let rect = self.style.arc_rect();
        let alpha = if scene.disabled { 0.4 } else { 1.0 };
        let track_width = self.style.track_width();
        let arc = arc_path(rect);

        // Track
        let mut gradient = canvas::gradient::Linear::new(
            to_screen(scene.gradient.start, rect),
            to_screen(scene.gradient.end, rect),
        );
        for stop in &scene.gradient.stops {
            gradient = gradient.add_stop(stop.offset as f32, to_color(stop.color, alpha));
        }
        frame.stroke(
            &arc,
            Stroke {
                style: canvas::Style::Gradient(canvas::Gradient::Linear(gradient)),
                width: track_width,
                line_cap: canvas::LineCap::Round,
                ..Stroke::default()
            },
        );

        // Inner shadow along the upper edge of the track
        let dy = scene.filter.dy * self.style.scale();
        frame.with_save(|frame| {
            frame.translate(Vector::new(0.0, -(track_width / 2.0 - dy)));
            frame.stroke(
                &arc,
                Stroke::default()
                    .with_color(Color::from_rgba(0.0, 0.0, 0.0, scene.filter.opacity * alpha))
                    .with_width(dy * 2.0)
                    .with_line_cap(canvas::LineCap::Round),
            );
        });

        // Thumb
        let center = to_screen(scene.thumb.center(&scene.view_box), rect);
        let radius = self.style.thumb_radius();

        frame.fill(
            &Path::circle(center + Vector::new(0.0, 1.0), radius + 1.0),
            Color::from_rgba(0.0, 0.0, 0.0, 0.2 * alpha),
        );
        frame.fill(
            &Path::circle(center, radius),
            Color {
                a: alpha,
                ..self.style.thumb_ring_color
            },
        );
        frame.fill(
            &Path::circle(center, radius * THUMB_INNER_RATIO),
            to_color(scene.thumb.color, alpha),
        );

        self.draw_bubble(frame, center, &scene.thumb.text, alpha);
    }

    fn draw_bubble(&self, frame: &mut Frame, thumb_center: Point, content: &str, alpha: f32) {
        let font_size = self.style.font_size * 0.875;
        let height = self.style.bubble_height - 6.0;
        let width = (content.chars().count() as f32 * font_size * 0.6 + 16.0).max(height);
        let bottom = thumb_center.y - self.style.thumb_radius() - 6.0;
        let top_left = Point::new(thumb_center.x - width / 2.0, bottom - height);

        frame.fill(
            &Path::rounded_rectangle(top_left, Size::new(width, height), (height / 2.0).into()),
            Color {
                a: 0.9 * alpha,
                ..self.style.bubble_color
            },
        );

        let label = Text {
            content: content.to_string(),
            position: Point::new(thumb_center.x, bottom - height / 2.0),
            color: Color {
                a: alpha,
                ..self.style.bubble_text_color
            },
            size: font_size.into(),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center.into(),
            ..Text::default()
        };
        frame.fill_text(label);
    }
}

/// Find what a canvas-local point lands on: the thumb takes precedence
/// over the track.
pub fn hit_test(slider: &ArcSlider, style: &ArcSliderStyle, local: Point) -> Option<PointerTarget> {
    let rect = style.arc_rect();
    let scene = slider.scene();

    let thumb = to_screen(scene.thumb.center(&scene.view_box), rect);
    if thumb.distance(local) <= style.thumb_radius() + HIT_SLOP {
        return Some(PointerTarget::Thumb);
    }

    let in_view_box = VIEW_BOX.unmap_point(arc_slider_core::Point::new(local.x, local.y), rect);
    let distance = slider.geometry().distance_to(in_view_box) * rect.width / VIEW_BOX.width;
    if distance <= style.track_width() / 2.0 + HIT_SLOP {
        return Some(PointerTarget::Path);
    }

    None
}

fn arc_path(rect: Rect) -> Path {
    Path::new(|builder| {
        builder.move_to(to_screen(ARC_START, rect));
        for segment in &ARC_SEGMENTS {
            match *segment {
                Segment::Line(to) => builder.line_to(to_screen(to, rect)),
                Segment::Cubic { ctrl1, ctrl2, to } => builder.bezier_curve_to(
                    to_screen(ctrl1, rect),
                    to_screen(ctrl2, rect),
                    to_screen(to, rect),
                ),
            }
        }
    })
}

fn to_screen(p: arc_slider_core::Point, rect: Rect) -> Point {
    let mapped = VIEW_BOX.map_point(p, rect);
    Point::new(mapped.x, mapped.y)
}

fn to_color(rgb: Rgb, alpha: f32) -> Color {
    Color {
        a: alpha,
        ..Color::from_rgb8(rgb.r, rgb.g, rgb.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arc_slider_core::SliderConfig;

    fn slider(value: f64) -> ArcSlider {
        ArcSlider::new(SliderConfig::default().with_id("w").with_value(value)).unwrap()
    }

    #[test]
    fn test_canvas_contains_arc() {
        let style = ArcSliderStyle::default();
        let rect = style.arc_rect();
        let size = style.canvas_size();

        assert!(rect.x > 0.0 && rect.y > 0.0);
        assert!(rect.x + rect.width < size.width);
        assert!(rect.y + rect.height < size.height);
        assert!((rect.width / rect.height - VIEW_BOX.width / VIEW_BOX.height).abs() < 1e-4);
    }

    #[test]
    fn test_hit_thumb() {
        let style = ArcSliderStyle::default();
        let slider = slider(50.0);
        let scene = slider.scene();
        let center = to_screen(scene.thumb.center(&scene.view_box), style.arc_rect());

        assert_eq!(
            hit_test(&slider, &style, center),
            Some(PointerTarget::Thumb)
        );
    }

    #[test]
    fn test_hit_path_away_from_thumb() {
        let style = ArcSliderStyle::default();
        let slider = slider(90.0);
        let start = to_screen(ARC_START, style.arc_rect());

        assert_eq!(hit_test(&slider, &style, start), Some(PointerTarget::Path));
    }

    #[test]
    fn test_miss_below_arc() {
        let style = ArcSliderStyle::default();
        let slider = slider(50.0);
        let rect = style.arc_rect();
        let below_middle = Point::new(rect.x + rect.width / 2.0, rect.y + rect.height);

        assert_eq!(hit_test(&slider, &style, below_middle), None);
    }

    #[test]
    fn test_track_width_ignores_arc_width() {
        let narrow = ArcSliderStyle::default();
        let wide = ArcSliderStyle {
            arc_width: narrow.arc_width * 2.0,
            ..narrow
        };

        assert_eq!(wide.track_width(), narrow.track_width());
        assert_eq!(narrow.track_width(), STROKE_WIDTH_EM * narrow.font_size);
        assert_eq!(wide.thumb_radius(), narrow.thumb_radius());

        let large_font = ArcSliderStyle {
            font_size: narrow.font_size * 2.0,
            ..narrow
        };
        assert_eq!(large_font.track_width(), 2.0 * narrow.track_width());
    }
}
