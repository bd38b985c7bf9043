use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Point;
use anyhow::Result;
use anyhow::ensure;

/// Axis-aligned rectangle, used as the margin-inclusive footprint of a component.
///
/// Rects only take part in overlap tests and are never modified once created.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min.is_finite() && y_min.is_finite() && x_max.is_finite() && y_max.is_finite(),
            "non-finite rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Creates the footprint of a component with its origin (lower-left corner) at `origin`,
    /// expanded on all four sides by `margin`.
    pub fn from_footprint(origin: Point, width: f64, height: f64, margin: f64) -> Result<Self> {
        ensure!(margin >= 0.0, "negative margin: {margin}");
        let Point(x, y) = origin;
        Rect::try_new(x - margin, y - margin, x + width + margin, y + height + margin)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True iff both rectangles overlap on both axes.
    /// Overlap is tested on open intervals: rectangles sharing only an edge or a corner do not intersect.
    #[inline(always)]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.collides_with(other)
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: f64::min(a.x_min, b.x_min),
            y_min: f64::min(a.y_min, b.y_min),
            x_max: f64::max(a.x_max, b.x_max),
            y_max: f64::max(a.y_max, b.y_max),
        }
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        f64::max(self.x_min, other.x_min) < f64::min(self.x_max, other.x_max)
            && f64::max(self.y_min, other.y_min) < f64::min(self.y_max, other.y_max)
    }
}
