//! Marker placement for the mock map.
//!
//! The mock map has no tiles and no real projection. Markers are placed by a
//! flat-earth linear approximation around the viewport center: one degree of
//! longitude or latitude moves a marker by `scale_factor` percent of the
//! container. This is only meaningful for small spans near the center and
//! ignores both zoom and the curvature of the earth. Results are not clamped,
//! so markers far from the center land outside `[0, 100]` and render outside
//! the visible container.
//!
//! # Examples
//!
//! ```
//! use stolpekart::geo::{project_marker, LatLng, DEFAULT_SCALE_FACTOR};
//!
//! let center = LatLng::new(40.7128, -74.006);
//! let north = LatLng::new(40.8128, -74.006);
//!
//! let p = project_marker(north, center, DEFAULT_SCALE_FACTOR);
//! assert_eq!(p.left_percent, 50.0);
//! assert!((p.top_percent - 40.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::transform::ScreenPoint;

/// Percent of the container one degree of offset moves a marker.
pub const DEFAULT_SCALE_FACTOR: f64 = 100.0;

/// Radius in pixels of the clickable marker dot (24 px diameter).
pub const MARKER_RADIUS: f64 = 12.0;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The map's reference frame for projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub center: LatLng,
    pub zoom: u32,
}

impl From<&crate::config::MapConfig> for MapViewport {
    fn from(config: &crate::config::MapConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
        }
    }
}

/// Popup content attached to a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoWindow {
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// A point of interest shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: String,
    pub position: LatLng,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub info_window: Option<InfoWindow>,
}

impl MapMarker {
    pub fn new(id: impl Into<String>, position: LatLng) -> Self {
        Self {
            id: id.into(),
            position,
            title: None,
            info_window: None,
        }
    }
}

/// Position of a marker as percentages of the container, measured from its
/// top-left corner. `(50, 50)` is the viewport center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerProjection {
    pub left_percent: f64,
    pub top_percent: f64,
}

impl MarkerProjection {
    /// Pixel position inside a container of the given size.
    pub fn to_pixels(&self, container_width: f64, container_height: f64) -> ScreenPoint {
        ScreenPoint::new(
            self.left_percent / 100.0 * container_width,
            self.top_percent / 100.0 * container_height,
        )
    }
}

/// Projects `marker` relative to `center`.
///
/// `left = 50 + (lng - center.lng) * k` and `top = 50 - (lat - center.lat) * k`.
pub fn project_marker(marker: LatLng, center: LatLng, scale_factor: f64) -> MarkerProjection {
    MarkerProjection {
        left_percent: 50.0 + (marker.lng - center.lng) * scale_factor,
        top_percent: 50.0 - (marker.lat - center.lat) * scale_factor,
    }
}

/// Center coordinate with four decimals, e.g. `"40.7128, -74.0060"`.
pub fn format_center_label(center: LatLng) -> String {
    format!("{:.4}, {:.4}", center.lat, center.lng)
}

/// Zoom and marker count summary, e.g. `"Zoom: 10 | Markers: 3"`.
pub fn format_status_label(zoom: u32, marker_count: usize) -> String {
    format!("Zoom: {zoom} | Markers: {marker_count}")
}

/// A marker together with its projected position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedMarker {
    /// Index of the marker in the input slice.
    pub marker_index: usize,
    pub projection: MarkerProjection,
}

/// Everything the mock map overlay needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MockMapLayout {
    pub viewport: MapViewport,
    pub markers: Vec<MapMarker>,
    pub placed: Vec<PlacedMarker>,
    pub center_label: String,
    pub status_label: String,
}

impl MockMapLayout {
    /// Projects every marker around the viewport center.
    ///
    /// Markers keep their input order, which is also their drawing order.
    pub fn compute(viewport: MapViewport, markers: &[MapMarker]) -> Self {
        let placed: Vec<PlacedMarker> = markers
            .iter()
            .enumerate()
            .map(|(marker_index, marker)| {
                let projection =
                    project_marker(marker.position, viewport.center, DEFAULT_SCALE_FACTOR);
                tracing::trace!(
                    id = %marker.id,
                    left = projection.left_percent,
                    top = projection.top_percent,
                    "placed marker"
                );
                PlacedMarker {
                    marker_index,
                    projection,
                }
            })
            .collect();

        tracing::debug!(
            markers = placed.len(),
            zoom = viewport.zoom,
            "computed mock map layout"
        );

        Self {
            viewport,
            markers: markers.to_vec(),
            placed,
            center_label: format_center_label(viewport.center),
            status_label: format_status_label(viewport.zoom, markers.len()),
        }
    }

    /// The marker drawn at `point` (pixels inside the container), if any.
    ///
    /// Later markers are drawn on top, so they win when dots overlap.
    pub fn hit_test(
        &self,
        point: ScreenPoint,
        container_width: f64,
        container_height: f64,
    ) -> Option<&MapMarker> {
        self.placed
            .iter()
            .rev()
            .find(|placed| {
                let center = placed
                    .projection
                    .to_pixels(container_width, container_height);
                let dx = point.x - center.x;
                let dy = point.y - center.y;
                dx * dx + dy * dy <= MARKER_RADIUS * MARKER_RADIUS
            })
            .map(|placed| &self.markers[placed.marker_index])
    }

    /// Reports the marker under `point` to `on_marker_click`.
    ///
    /// The callback runs at most once, synchronously, with the full marker.
    /// Returns whether a marker was hit.
    pub fn dispatch_click<F>(
        &self,
        point: ScreenPoint,
        container_width: f64,
        container_height: f64,
        mut on_marker_click: F,
    ) -> bool
    where
        F: FnMut(&MapMarker),
    {
        match self.hit_test(point, container_width, container_height) {
            Some(marker) => {
                on_marker_click(marker);
                true
            }
            None => false,
        }
    }
}
