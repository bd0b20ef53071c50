//! Coordinate spaces of a rendered chart.
//!
//! A chart is drawn into an outer canvas of `width x height` pixels. The bars,
//! axes and labels live in an inner *plot area* that is translated by
//! `(margin.left, margin.top)`. Geometry produced by [`crate::chart`] is in
//! plot-area coordinates; pointer events arrive in outer coordinates.
//!
//! Both spaces share the screen convention:
//!
//! - Origin (0, 0) is at the top-left
//! - X increases to the right
//! - Y increases downward
//!
//! # Examples
//!
//! ```rust
//! use stolpekart::{PlotArea, ScreenPoint};
//! use stolpekart::config::ChartConfig;
//!
//! let area = PlotArea::new(&ChartConfig::default().dimensions());
//!
//! // A click at (60, 20) in the canvas is the plot area's origin.
//! let inner = area.to_inner(ScreenPoint::new(60.0, 20.0));
//! assert_eq!((inner.x, inner.y), (0.0, 0.0));
//!
//! let outer = area.to_outer(ScreenPoint::new(10.0, 340.0));
//! assert_eq!((outer.x, outer.y), (70.0, 360.0));
//! ```

use num_traits::Float;
use serde::Serialize;

use crate::config::Dimensions;
use crate::scale::util::sorted_pair;

/// A rectangle in screen/pixel coordinates.
///
/// `x`/`y` give the top-left corner. Widths and heights may be negative when
/// they come from degenerate chart configs; containment handles that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenRect<S = f64> {
    /// X coordinate of the top-left corner in pixels.
    pub x: S,
    /// Y coordinate of the top-left corner in pixels.
    pub y: S,
    /// Width of the rectangle in pixels.
    pub width: S,
    /// Height of the rectangle in pixels.
    pub height: S,
}

/// A point in screen/pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScreenPoint<S = f64> {
    /// X coordinate in pixels.
    pub x: S,
    /// Y coordinate in pixels.
    pub y: S,
}

impl<S> ScreenPoint<S> {
    /// Creates a new screen point at the given pixel coordinates.
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }
}

impl<S: Float> ScreenRect<S> {
    /// Returns the maximum X coordinate (right edge) of the rectangle.
    pub fn max_x(&self) -> S {
        self.x + self.width
    }

    /// Returns the maximum Y coordinate (bottom edge) of the rectangle.
    pub fn max_y(&self) -> S {
        self.y + self.height
    }

    /// Returns true if the provided point lies within this rectangle.
    ///
    /// Bounds are inclusive and negative spans are handled correctly.
    pub fn contains(&self, point: &ScreenPoint<S>) -> bool {
        self.contains_x(&point.x) && self.contains_y(&point.y)
    }

    /// Returns true if the provided X value lies within the horizontal extent.
    pub fn contains_x(&self, value: &S) -> bool {
        let (min_x, max_x) = sorted_pair(self.x, self.max_x());
        value >= &min_x && value <= &max_x
    }

    /// Returns true if the provided Y value lies within the vertical extent.
    pub fn contains_y(&self, value: &S) -> bool {
        let (min_y, max_y) = sorted_pair(self.y, self.max_y());
        value >= &min_y && value <= &max_y
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Self, t: S) -> Self {
        let mix = |a: S, b: S| a + (b - a) * t;
        Self {
            x: mix(self.x, other.x),
            y: mix(self.y, other.y),
            width: mix(self.width, other.width),
            height: mix(self.height, other.height),
        }
    }
}

/// The inner plot area of a chart, positioned inside the outer canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotArea {
    bounds: ScreenRect,
}

impl PlotArea {
    /// Plot area of the given chart dimensions.
    pub fn new(dimensions: &Dimensions) -> Self {
        Self {
            bounds: ScreenRect {
                x: dimensions.margin.left,
                y: dimensions.margin.top,
                width: dimensions.inner_width,
                height: dimensions.inner_height,
            },
        }
    }

    /// The plot area in outer coordinates.
    pub fn bounds(&self) -> ScreenRect {
        self.bounds
    }

    /// The translation applied to the plot area, `(margin.left, margin.top)`.
    pub fn offset(&self) -> ScreenPoint {
        ScreenPoint::new(self.bounds.x, self.bounds.y)
    }

    /// Converts an outer (canvas) point into plot-area coordinates.
    pub fn to_inner(&self, point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(point.x - self.bounds.x, point.y - self.bounds.y)
    }

    /// Converts a plot-area point into outer (canvas) coordinates.
    pub fn to_outer(&self, point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(point.x + self.bounds.x, point.y + self.bounds.y)
    }

    /// Whether an outer point falls inside the plot area.
    pub fn contains(&self, point: &ScreenPoint) -> bool {
        self.bounds.contains(point)
    }
}
