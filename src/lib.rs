//! Stolpekart (bar chart + map) geometry library
//!
//! `stolpekart` computes the drawable geometry behind two small widgets: a bar
//! chart and a mock map. It does no drawing itself. Every function is a pure,
//! synchronous computation over its inputs, so layouts can be recomputed on
//! every render from any thread.
//!
//! # Core Concepts
//!
//! ## Scales
//!
//! - [`scale::BandScale`] - categories onto evenly spaced, padded pixel bands
//! - [`scale::LinearScale`] - values onto an inverted pixel range (`[0, max]` to
//!   `[inner_height, 0]`)
//! - [`scale::Linear`] - the generic normalized linear scale with "nice" ticks
//!
//! ## Bar Chart
//!
//! [`chart::BarChartLayout`] combines the scales with [`config`] (dimensions
//! and margins), [`color`] (per-datum colours), [`axis`] (ticks with
//! [`format`]ted labels) and [`transform`] (plot area and hit testing).
//!
//! ## Mock Map
//!
//! [`geo`] places map markers by a flat-earth approximation around the
//! viewport center and dispatches marker clicks.
//!
//! # Examples
//!
//! ## Bar Chart Geometry
//!
//! ```rust
//! use stolpekart::chart::{BarChartLayout, Datum};
//! use stolpekart::config::ChartConfigPatch;
//! use stolpekart::ScreenPoint;
//!
//! let data = vec![
//!     Datum::new("1", 30.0, "Thirty", "A"),
//!     Datum::new("2", 60.0, "Sixty", "B"),
//! ];
//! let layout = BarChartLayout::compute(&data, &ChartConfigPatch::default());
//!
//! let b = &layout.bars[1];
//! assert_eq!((b.end.y, b.end.height), (0.0, 340.0));
//!
//! let mut clicked = None;
//! layout.dispatch_click(ScreenPoint::new(400.0, 200.0), |d| clicked = Some(d.id.clone()));
//! assert_eq!(clicked.as_deref(), Some("2"));
//! ```
//!
//! ## Marker Projection
//!
//! ```rust
//! use stolpekart::geo::{project_marker, format_center_label, LatLng, DEFAULT_SCALE_FACTOR};
//!
//! let center = LatLng::new(40.7128, -74.006);
//! let p = project_marker(center, center, DEFAULT_SCALE_FACTOR);
//! assert_eq!((p.left_percent, p.top_percent), (50.0, 50.0));
//! assert_eq!(format_center_label(center), "40.7128, -74.0060");
//! ```

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod geo;
pub mod scale;
pub mod transform;

pub use error::{Error, Result};
pub use num_traits::Float;
pub use scale::{Scale, TickIter};
pub use transform::{PlotArea, ScreenPoint, ScreenRect};
