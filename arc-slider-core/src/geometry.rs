//! Arc path geometry and the mapping between progress, path points and
//! on-screen offsets.

use std::sync::LazyLock;

use lyon_geom::{Box2D, CubicBezierSegment, LineSegment, point};
use serde::{Deserialize, Serialize};

/// SVG path data of the arc, in view box coordinates.
pub const ARC_PATH_DATA: &str = "M2 34L7.21879 31.0968C78.5901 -8.60616 165.659 -7.50128 236 34V34";

/// View box the arc path is drawn in.
pub const VIEW_BOX: ViewBox = ViewBox {
    min_x: 0.0,
    min_y: 0.0,
    width: 238.0,
    height: 36.0,
};

/// First point of the arc.
pub const ARC_START: Point = Point::new(2.0, 34.0);

/// Drawing commands of the arc after [`ARC_START`].
///
/// The trailing `V34` of [`ARC_PATH_DATA`] has zero length and is omitted.
pub const ARC_SEGMENTS: [Segment; 2] = [
    Segment::Line(Point::new(7.21879, 31.0968)),
    Segment::Cubic {
        ctrl1: Point::new(78.5901, -8.60616),
        ctrl2: Point::new(165.659, -7.50128),
        to: Point::new(236.0, 34.0),
    },
];

/// Samples taken along each curved segment when flattening.
const CURVE_SAMPLES: usize = 128;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle (a bounding box).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// The SVG `viewBox` of the rendered arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Value of the SVG `viewBox` attribute.
    pub fn to_attribute(&self) -> String {
        format!(
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }

    /// Map a rectangle in view box coordinates into `rendered` pixel space.
    pub fn map_rect(&self, rect: Rect, rendered: Rect) -> Rect {
        let scale_x = rendered.width / self.width;
        let scale_y = rendered.height / self.height;

        Rect::new(
            rendered.x + (rect.x - self.min_x) * scale_x,
            rendered.y + (rect.y - self.min_y) * scale_y,
            rect.width * scale_x,
            rect.height * scale_y,
        )
    }

    /// Map a point in `rendered` pixel space back into view box coordinates.
    pub fn unmap_point(&self, p: Point, rendered: Rect) -> Point {
        if rendered.width <= 0.0 || rendered.height <= 0.0 {
            return Point::new(self.min_x, self.min_y);
        }
        Point::new(
            self.min_x + (p.x - rendered.x) * self.width / rendered.width,
            self.min_y + (p.y - rendered.y) * self.height / rendered.height,
        )
    }

    /// Map a point in view box coordinates into `rendered` pixel space.
    pub fn map_point(&self, p: Point, rendered: Rect) -> Point {
        Point::new(
            rendered.x + (p.x - self.min_x) * rendered.width / self.width,
            rendered.y + (p.y - self.min_y) * rendered.height / self.height,
        )
    }
}

/// Position of the thumb, as percentages of the rendered element's size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThumbOffset {
    pub left_pct: f32,
    pub top_pct: f32,
}

/// One drawing command after the initial move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(Point),
    Cubic { ctrl1: Point, ctrl2: Point, to: Point },
}

/// A path flattened into a polyline with cumulative lengths.
///
/// Built once, then queried for every pointer move.
#[derive(Debug, Clone)]
pub struct PathGeometry {
    points: Vec<Point>,
    cumulative: Vec<f32>,
    bounds: Rect,
}

static ARC: LazyLock<PathGeometry> =
    LazyLock::new(|| PathGeometry::from_segments(ARC_START, &ARC_SEGMENTS));

impl PathGeometry {
    /// Geometry of the slider arc ([`ARC_PATH_DATA`]).
    pub fn arc() -> &'static PathGeometry {
        &ARC
    }

    pub fn from_segments(start: Point, segments: &[Segment]) -> Self {
        let mut points = vec![start];
        let mut current = start;

        for segment in segments {
            match *segment {
                Segment::Line(to) => {
                    points.push(to);
                    current = to;
                }
                Segment::Cubic { ctrl1, ctrl2, to } => {
                    let curve = CubicBezierSegment {
                        from: point(current.x, current.y),
                        ctrl1: point(ctrl1.x, ctrl1.y),
                        ctrl2: point(ctrl2.x, ctrl2.y),
                        to: point(to.x, to.y),
                    };
                    for i in 1..=CURVE_SAMPLES {
                        let p = curve.sample(i as f32 / CURVE_SAMPLES as f32);
                        points.push(Point::new(p.x, p.y));
                    }
                    current = to;
                }
            }
        }

        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(total);
        for pair in points.windows(2) {
            total += line(pair[0], pair[1]).length();
            cumulative.push(total);
        }

        let extent = Box2D::from_points(points.iter().map(|p| point(p.x, p.y)));
        let bounds = Rect::new(extent.min.x, extent.min.y, extent.width(), extent.height());

        Self {
            points,
            cumulative,
            bounds,
        }
    }

    /// Total length of the path.
    pub fn total_length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Bounding box of the path, in path coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Point at `length` along the path (clamped to the path's extent).
    pub fn point_at_length(&self, length: f32) -> Point {
        let length = length.clamp(0.0, self.total_length());
        let index = self.cumulative.partition_point(|&c| c < length);

        if index == 0 {
            return self.points[0];
        }
        if index >= self.points.len() {
            return self.points[self.points.len() - 1];
        }

        let start = self.cumulative[index - 1];
        let span = self.cumulative[index] - start;
        let t = if span > 0.0 {
            (length - start) / span
        } else {
            0.0
        };

        let p = line(self.points[index - 1], self.points[index]).sample(t);
        Point::new(p.x, p.y)
    }

    /// Shortest distance from `p` to the path.
    pub fn distance_to(&self, p: Point) -> f32 {
        self.points
            .windows(2)
            .map(|pair| line(pair[0], pair[1]).distance_to_point(point(p.x, p.y)))
            .fold(f32::INFINITY, f32::min)
    }

    /// Point at a fraction of the total length.
    pub fn point_at_progress(&self, progress: f64) -> Point {
        self.point_at_length(clamp_progress(progress) as f32 * self.total_length())
    }
}

fn line(from: Point, to: Point) -> LineSegment<f32> {
    LineSegment {
        from: point(from.x, from.y),
        to: point(to.x, to.y),
    }
}

/// Clamp a progress fraction into `[0, 1]`; NaN becomes 0.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Progress from a horizontal pointer position over the path's bounding box.
///
/// Only `x` matters, whatever the curvature of the arc.
pub fn progress_from_pointer(pointer_x: f32, path_bounds: Rect) -> f64 {
    if path_bounds.width <= 0.0 || !path_bounds.width.is_finite() {
        return 0.0;
    }
    clamp_progress(f64::from((pointer_x - path_bounds.x) / path_bounds.width))
}

/// Convert a path-local point into percentage offsets of the rendered element.
///
/// A zero-sized rendered element falls back to the view box size.
pub fn thumb_offset(p: Point, view_box: ViewBox, rendered: Size) -> ThumbOffset {
    let pct = |coord: f32, view_len: f32, rendered_len: f32| {
        let rendered_len = if rendered_len > 0.0 {
            rendered_len
        } else {
            view_len
        };
        let scale = rendered_len / view_len;
        coord * scale * 100.0 / rendered_len
    };

    ThumbOffset {
        left_pct: pct(p.x - view_box.min_x, view_box.width, rendered.width),
        top_pct: pct(p.y - view_box.min_y, view_box.height, rendered.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_straight_line_geometry() {
        let line = PathGeometry::from_segments(
            Point::new(0.0, 0.0),
            &[
                Segment::Line(Point::new(10.0, 0.0)),
                Segment::Line(Point::new(10.0, 10.0)),
            ],
        );

        assert!(approx(line.total_length(), 20.0));
        assert_eq!(line.point_at_length(5.0), Point::new(5.0, 0.0));
        assert_eq!(line.point_at_length(15.0), Point::new(10.0, 5.0));
        assert_eq!(line.point_at_progress(1.0), Point::new(10.0, 10.0));
        assert_eq!(line.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_arc_endpoints() {
        let arc = PathGeometry::arc();

        assert_eq!(arc.point_at_progress(0.0), Point::new(2.0, 34.0));

        let end = arc.point_at_progress(1.0);
        assert!(approx(end.x, 236.0));
        assert!(approx(end.y, 34.0));

        // The curve bulges upwards, well inside the view box
        let middle = arc.point_at_progress(0.5);
        assert!(middle.y < 10.0);
        assert!(middle.y >= VIEW_BOX.min_y - 1.0);
        assert!(arc.total_length() > 234.0);
    }

    #[test]
    fn test_arc_points_move_right() {
        let arc = PathGeometry::arc();
        let mut last = arc.point_at_progress(0.0).x;

        for i in 1..=20 {
            let x = arc.point_at_progress(i as f64 / 20.0).x;
            assert!(x > last);
            last = x;
        }
    }

    #[test]
    fn test_point_at_length_is_clamped() {
        let arc = PathGeometry::arc();
        assert_eq!(arc.point_at_length(-10.0), arc.point_at_progress(0.0));
        assert_eq!(arc.point_at_length(1e6), arc.point_at_progress(1.0));
    }

    #[test]
    fn test_progress_from_pointer() {
        let bounds = Rect::new(100.0, 0.0, 200.0, 30.0);

        assert_eq!(progress_from_pointer(100.0, bounds), 0.0);
        assert_eq!(progress_from_pointer(200.0, bounds), 0.5);
        assert_eq!(progress_from_pointer(300.0, bounds), 1.0);
        // Outside the element on either side
        assert_eq!(progress_from_pointer(-50.0, bounds), 0.0);
        assert_eq!(progress_from_pointer(900.0, bounds), 1.0);
        // Degenerate box
        assert_eq!(progress_from_pointer(10.0, Rect::default()), 0.0);
    }

    #[test]
    fn test_thumb_offset_is_scale_independent() {
        let p = Point::new(119.0, 18.0);

        let native = thumb_offset(p, VIEW_BOX, VIEW_BOX.size());
        let scaled = thumb_offset(p, VIEW_BOX, Size::new(476.0, 72.0));
        let empty = thumb_offset(p, VIEW_BOX, Size::default());

        assert!(approx(native.left_pct, 50.0));
        assert!(approx(native.top_pct, 50.0));
        assert!(approx(scaled.left_pct, native.left_pct));
        assert!(approx(empty.top_pct, native.top_pct));
    }

    #[test]
    fn test_distance_to() {
        let line = PathGeometry::from_segments(
            Point::new(0.0, 0.0),
            &[Segment::Line(Point::new(10.0, 0.0))],
        );
        assert_eq!(line.distance_to(Point::new(5.0, 3.0)), 3.0);
        assert_eq!(line.distance_to(Point::new(13.0, 4.0)), 5.0);

        let arc = PathGeometry::arc();
        assert!(arc.distance_to(arc.point_at_progress(0.3)) < 0.01);
        assert!(arc.distance_to(Point::new(119.0, 34.0)) > 20.0);
    }

    #[test]
    fn test_degenerate_segment_distance() {
        let dot = PathGeometry::from_segments(
            Point::new(4.0, 4.0),
            &[Segment::Line(Point::new(4.0, 4.0))],
        );

        assert_eq!(dot.distance_to(Point::new(7.0, 8.0)), 5.0);
        assert_eq!(dot.bounds(), Rect::new(4.0, 4.0, 0.0, 0.0));
    }

    #[test]
    fn test_arc_bounds() {
        let bounds = PathGeometry::arc().bounds();

        assert!(approx(bounds.x, 2.0));
        assert!(approx(bounds.x + bounds.width, 236.0));
        assert!(approx(bounds.y + bounds.height, 34.0));
        assert!(bounds.y > 0.0 && bounds.y < 5.0);
    }

    #[test]
    fn test_map_rect() {
        let rendered = Rect::new(10.0, 20.0, 476.0, 72.0);
        let mapped = VIEW_BOX.map_rect(Rect::new(2.0, 0.0, 234.0, 36.0), rendered);

        assert_eq!(mapped, Rect::new(14.0, 20.0, 468.0, 72.0));
        assert_eq!(
            VIEW_BOX.map_point(Point::new(119.0, 18.0), rendered),
            Point::new(248.0, 56.0)
        );
        assert_eq!(
            VIEW_BOX.unmap_point(Point::new(248.0, 56.0), rendered),
            Point::new(119.0, 18.0)
        );
    }
}
