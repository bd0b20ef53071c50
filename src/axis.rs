//! Axis ticks for the bar chart.
//!
//! The category axis sits along the bottom of the plot area with one tick per
//! band; the value axis runs up the left edge with "nice" ticks labelled by
//! [`format_value_default`].

use serde::Serialize;

use crate::format::format_value_default;
use crate::scale::{BandScale, DEFAULT_TICK_COUNT, LinearScale};

/// Which edge of the plot area an axis is drawn along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisPosition {
    Bottom,
    Left,
}

/// A single labelled tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    /// Pixel offset along the axis, relative to the plot area.
    pub offset: f64,
    /// Text drawn next to the tick.
    pub label: String,
}

/// An axis ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub position: AxisPosition,
    /// Translation of the axis group within the plot area (`(0, inner_height)`
    /// for the bottom axis, `(0, 0)` for the left one).
    pub translate: (f64, f64),
    pub ticks: Vec<AxisTick>,
}

/// Category axis: one tick per band, at the band center, labelled with the category.
pub fn bottom_axis(x: &BandScale, inner_height: f64) -> Axis {
    let ticks = x
        .bands()
        .map(|(category, band)| AxisTick {
            offset: band.center(),
            label: category.to_string(),
        })
        .collect();

    Axis {
        position: AxisPosition::Bottom,
        translate: (0.0, inner_height),
        ticks,
    }
}

/// Value axis: nice ticks over `[0, max]`, positioned at `y(value)`.
pub fn left_axis(y: &LinearScale) -> Axis {
    let ticks = y
        .ticks(DEFAULT_TICK_COUNT)
        .into_iter()
        .map(|value| AxisTick {
            offset: y.y(value),
            label: format_value_default(value),
        })
        .collect();

    Axis {
        position: AxisPosition::Left,
        translate: (0.0, 0.0),
        ticks,
    }
}
