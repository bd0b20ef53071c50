//! Bar chart layout.
//!
//! [`BarChartLayout::compute`] turns a dataset and a (partial) config into
//! everything a renderer needs: plot-area dimensions, the category and value
//! scales, colours, axes, per-bar start and end rectangles for the grow-in
//! transition, value labels, and hit testing for click dispatch.
//!
//! # Examples
//!
//! ```
//! use stolpekart::chart::{BarChartLayout, Datum};
//! use stolpekart::config::ChartConfigPatch;
//!
//! let data = vec![
//!     Datum::new("1", 30.0, "Thirty", "A"),
//!     Datum::new("2", 60.0, "Sixty", "B"),
//! ];
//! let layout = BarChartLayout::compute(&data, &ChartConfigPatch::default());
//!
//! assert_eq!(layout.dimensions.inner_width, 510.0);
//! assert_eq!(layout.x.bandwidth(), 229.5);
//! assert_eq!(layout.bars[0].end.y, 170.0);
//! assert_eq!(layout.bars[1].end.y, 0.0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::axis::{self, Axis};
use crate::color::{self, ColorAssignment, assign_colors};
use crate::config::{ChartConfigPatch, Dimensions};
use crate::format::format_value_default;
use crate::scale::{BandScale, DEFAULT_PADDING, LinearScale, compute_band_scale, compute_linear_scale};
use crate::transform::{PlotArea, ScreenPoint, ScreenRect};

/// Vertical gap in pixels between the top of a bar and its value label.
pub const LABEL_OFFSET: f64 = 5.0;

/// Duration of the grow-in transition.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(750);

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    /// Unique within a dataset; keys the colour assignment.
    pub id: String,
    pub value: f64,
    pub label: String,
    /// Band the bar is drawn in.
    pub category: String,
}

impl Datum {
    pub fn new(
        id: impl Into<String>,
        value: f64,
        label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            value,
            label: label.into(),
            category: category.into(),
        }
    }
}

/// Largest value in `data`, or `0` when there is none. NaN values are skipped.
pub fn max_value(data: &[Datum]) -> f64 {
    data.iter()
        .map(|d| d.value)
        .filter(|v| !v.is_nan())
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Smallest value in `data`, or `0` when there is none. NaN values are skipped.
pub fn min_value(data: &[Datum]) -> f64 {
    data.iter()
        .map(|d| d.value)
        .filter(|v| !v.is_nan())
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Easing curve of a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    #[default]
    Linear,
}

impl Easing {
    /// Maps linear time `t` in `[0, 1]` onto eased progress.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
        }
    }
}

/// A single timed transition from start to end geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TRANSITION,
            easing: Easing::Linear,
        }
    }
}

impl Transition {
    /// Eased progress in `[0, 1]` after `elapsed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use stolpekart::chart::Transition;
    ///
    /// let t = Transition::default();
    /// assert_eq!(t.progress(Duration::ZERO), 0.0);
    /// assert_eq!(t.progress(Duration::from_millis(375)), 0.5);
    /// assert_eq!(t.progress(Duration::from_secs(5)), 1.0);
    /// ```
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.easing.apply(t.clamp(0.0, 1.0))
    }
}

/// Text drawn above a bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarLabel {
    /// Horizontal center of the band.
    pub x: f64,
    /// [`LABEL_OFFSET`] pixels above the bar's final top edge.
    pub y: f64,
    pub text: String,
}

/// Geometry of one bar, in plot-area coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Index of the datum in the input dataset.
    pub datum_index: usize,
    pub fill: String,
    /// Collapsed onto the baseline: `y = inner_height`, `height = 0`.
    pub start: ScreenRect,
    /// Final geometry: `y = y(value)`, `height = inner_height - y(value)`.
    pub end: ScreenRect,
    pub label: BarLabel,
}

impl Bar {
    /// Geometry at `progress` through the transition (clamped to `[0, 1]`).
    pub fn at(&self, progress: f64) -> ScreenRect {
        self.start.lerp(&self.end, progress.clamp(0.0, 1.0))
    }
}

/// Complete bar chart geometry for one dataset and config.
#[derive(Debug)]
pub struct BarChartLayout {
    pub dimensions: Dimensions,
    pub plot_area: PlotArea,
    /// Category scale over the data's categories, first-seen order.
    pub x: BandScale,
    /// Value scale over `[0, max_value]`.
    pub y: LinearScale,
    pub colors: ColorAssignment,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// One bar per datum, in dataset (and drawing) order.
    pub bars: Vec<Bar>,
    /// `None` when the config disables animation.
    pub transition: Option<Transition>,
    data: Vec<Datum>,
}

impl BarChartLayout {
    /// Lays out `data` with `patch` merged over the default config.
    ///
    /// An empty dataset produces no bars and no axis ticks. Degenerate configs
    /// (no room left inside the margins) are laid out as-is.
    pub fn compute(data: &[Datum], patch: &ChartConfigPatch) -> Self {
        let config = patch.resolve();
        let dimensions = config.dimensions();
        let plot_area = PlotArea::new(&dimensions);

        let x = compute_band_scale(
            data.iter().map(|d| d.category.as_str()),
            dimensions.inner_width,
            DEFAULT_PADDING,
        );
        let y = compute_linear_scale(max_value(data), dimensions.inner_height);
        let colors = assign_colors(data.iter().map(|d| d.id.as_str()), &config.palette());

        let (x_axis, y_axis) = if data.is_empty() {
            (
                Axis {
                    ticks: Vec::new(),
                    ..axis::bottom_axis(&x, dimensions.inner_height)
                },
                Axis {
                    ticks: Vec::new(),
                    ..axis::left_axis(&y)
                },
            )
        } else {
            (axis::bottom_axis(&x, dimensions.inner_height), axis::left_axis(&y))
        };

        let bandwidth = x.bandwidth();
        let bars: Vec<Bar> = data
            .iter()
            .enumerate()
            .map(|(datum_index, datum)| {
                let left = x.start_or_zero(&datum.category);
                let top = y.y(datum.value);
                Bar {
                    datum_index,
                    fill: colors
                        .get(&datum.id)
                        .unwrap_or(color::CATEGORY10[0])
                        .to_string(),
                    start: ScreenRect {
                        x: left,
                        y: dimensions.inner_height,
                        width: bandwidth,
                        height: 0.0,
                    },
                    end: ScreenRect {
                        x: left,
                        y: top,
                        width: bandwidth,
                        height: dimensions.inner_height - top,
                    },
                    label: BarLabel {
                        x: left + bandwidth / 2.0,
                        y: top - LABEL_OFFSET,
                        text: format_value_default(datum.value),
                    },
                }
            })
            .collect();

        tracing::debug!(
            bars = bars.len(),
            categories = x.len(),
            inner_width = dimensions.inner_width,
            inner_height = dimensions.inner_height,
            "computed bar chart layout"
        );

        Self {
            dimensions,
            plot_area,
            x,
            y,
            colors,
            x_axis,
            y_axis,
            bars,
            transition: config.animate.then(Transition::default),
            data: data.to_vec(),
        }
    }

    /// The dataset this layout was computed from.
    pub fn data(&self) -> &[Datum] {
        &self.data
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar rectangles `elapsed` into the transition, or final rectangles when
    /// animation is disabled.
    pub fn frame(&self, elapsed: Duration) -> Vec<ScreenRect> {
        let progress = self
            .transition
            .map_or(1.0, |transition| transition.progress(elapsed));
        self.bars.iter().map(|bar| bar.at(progress)).collect()
    }

    /// The datum whose bar, as drawn at `progress`, contains `point`.
    ///
    /// `point` is in outer (canvas) coordinates. Later bars are drawn on top,
    /// so they win when bars overlap.
    pub fn hit_test_at(&self, point: ScreenPoint, progress: f64) -> Option<&Datum> {
        let inner = self.plot_area.to_inner(point);
        self.bars
            .iter()
            .rev()
            .find(|bar| bar.at(progress).contains(&inner))
            .map(|bar| &self.data[bar.datum_index])
    }

    /// [`BarChartLayout::hit_test_at`] against the final bar geometry.
    pub fn hit_test(&self, point: ScreenPoint) -> Option<&Datum> {
        self.hit_test_at(point, 1.0)
    }

    /// Reports the datum under `point` to `on_data_point_click`.
    ///
    /// The callback runs at most once, synchronously, with the full datum.
    /// Returns whether a bar was hit.
    pub fn dispatch_click<F>(&self, point: ScreenPoint, mut on_data_point_click: F) -> bool
    where
        F: FnMut(&Datum),
    {
        match self.hit_test(point) {
            Some(datum) => {
                on_data_point_click(datum);
                true
            }
            None => false,
        }
    }
}
