//! Chart and map configuration.
//!
//! Configs come in two shapes: a complete value ([`ChartConfig`],
//! [`MapConfig`]) with a named default, and a partial patch
//! ([`ChartConfigPatch`], [`MapConfigPatch`]) that callers fill in and merge
//! over the defaults. Merging is shallow: a patch that sets `margin` replaces
//! all four sides at once.
//!
//! Patches deserialize from camelCase JSON:
//!
//! ```
//! use stolpekart::config::ChartConfig;
//!
//! let config = ChartConfig::from_json(r#"{ "width": 800, "colors": ["red", "blue"] }"#).unwrap();
//! assert_eq!(config.width, 800.0);
//! assert_eq!(config.height, 400.0);
//! assert_eq!(config.palette(), vec!["red".to_string(), "blue".to_string()]);
//! ```

use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::{Error, Result};
use crate::geo::LatLng;

/// Space reserved around the plot area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 30.0, 40.0, 60.0)
    }
}

/// Complete bar chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Outer width of the chart in pixels.
    pub width: f64,
    /// Outer height of the chart in pixels.
    pub height: f64,
    pub margin: Margin,
    /// Colour tokens cycled over datum ids; `None` uses Category10.
    pub colors: Option<Vec<String>>,
    /// Whether bars grow from the baseline or appear at their final size.
    pub animate: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            margin: Margin::default(),
            colors: Some(color::default_palette()),
            animate: true,
        }
    }
}

impl ChartConfig {
    /// Parses a JSON patch and merges it over [`ChartConfig::default`].
    pub fn from_json(json: &str) -> Result<Self> {
        let patch: ChartConfigPatch = serde_json::from_str(json)?;
        Ok(patch.merge_over(&Self::default()))
    }

    /// The palette to colour bars with, falling back to Category10 when none
    /// (or an empty one) is configured.
    pub fn palette(&self) -> Vec<String> {
        match &self.colors {
            Some(colors) if !colors.is_empty() => colors.clone(),
            _ => color::default_palette(),
        }
    }

    /// Derives the plot-area dimensions of this config.
    pub fn dimensions(&self) -> Dimensions {
        let inner_width = self.width - self.margin.left - self.margin.right;
        let inner_height = self.height - self.margin.top - self.margin.bottom;
        if inner_width <= 0.0 || inner_height <= 0.0 {
            tracing::warn!(
                inner_width,
                inner_height,
                "chart margins leave no plot area; geometry will be degenerate"
            );
        }
        Dimensions {
            width: self.width,
            height: self.height,
            margin: self.margin,
            inner_width,
            inner_height,
        }
    }
}

/// Partial [`ChartConfig`]; unset fields take the default's value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ChartConfigPatch {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Option<Margin>,
    pub colors: Option<Vec<String>>,
    pub animate: Option<bool>,
}

impl ChartConfigPatch {
    /// Shallow merge of this patch over `base`.
    pub fn merge_over(&self, base: &ChartConfig) -> ChartConfig {
        ChartConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            margin: self.margin.unwrap_or(base.margin),
            colors: self.colors.clone().or_else(|| base.colors.clone()),
            animate: self.animate.unwrap_or(base.animate),
        }
    }

    /// Merges this patch over [`ChartConfig::default`].
    pub fn resolve(&self) -> ChartConfig {
        self.merge_over(&ChartConfig::default())
    }
}

/// Outer and inner (plot-area) size of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// `width - margin.left - margin.right`; may be zero or negative.
    pub inner_width: f64,
    /// `height - margin.top - margin.bottom`; may be zero or negative.
    pub inner_height: f64,
}

impl Dimensions {
    /// Rejects dimensions whose plot area is not strictly positive.
    ///
    /// Geometry never performs this check itself; callers that want to skip
    /// rendering degenerate charts can run it first.
    ///
    /// # Examples
    ///
    /// ```
    /// use stolpekart::config::{compute_dimensions, ChartConfigPatch};
    ///
    /// let tiny = ChartConfigPatch { width: Some(50.0), ..Default::default() };
    /// assert!(compute_dimensions(&tiny).validate().is_err());
    /// ```
    pub fn validate(self) -> Result<Self> {
        if self.inner_width > 0.0 && self.inner_height > 0.0 {
            Ok(self)
        } else {
            Err(Error::InvalidDimensions {
                inner_width: self.inner_width,
                inner_height: self.inner_height,
            })
        }
    }
}

/// Merges `patch` over the default chart config and derives its dimensions.
///
/// Negative or zero inner sizes pass through unchanged.
///
/// # Examples
///
/// ```
/// use stolpekart::config::{compute_dimensions, ChartConfigPatch};
///
/// let dims = compute_dimensions(&ChartConfigPatch::default());
/// assert_eq!((dims.inner_width, dims.inner_height), (510.0, 340.0));
/// ```
pub fn compute_dimensions(patch: &ChartConfigPatch) -> Dimensions {
    patch.resolve().dimensions()
}

/// Map type shown by the real map; the mock map ignores it.
pub const DEFAULT_MAP_TYPE: &str = "roadmap";

/// Complete map configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: u32,
    pub map_type_id: String,
}

impl Default for MapConfig {
    /// Centered on New York at zoom 10.
    fn default() -> Self {
        Self {
            center: LatLng::new(40.7128, -74.006),
            zoom: 10,
            map_type_id: DEFAULT_MAP_TYPE.to_string(),
        }
    }
}

impl MapConfig {
    /// Parses a JSON patch and merges it over [`MapConfig::default`].
    ///
    /// # Examples
    ///
    /// ```
    /// use stolpekart::config::MapConfig;
    ///
    /// let config = MapConfig::from_json(r#"{ "zoom": 12 }"#).unwrap();
    /// assert_eq!(config.zoom, 12);
    /// assert_eq!(config.center.lat, 40.7128);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let patch: MapConfigPatch = serde_json::from_str(json)?;
        Ok(patch.merge_over(&Self::default()))
    }
}

/// Partial [`MapConfig`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct MapConfigPatch {
    pub center: Option<LatLng>,
    pub zoom: Option<u32>,
    pub map_type_id: Option<String>,
}

impl MapConfigPatch {
    /// Shallow merge of this patch over `base`.
    ///
    /// A zoom of `0` counts as unset and falls back to `base.zoom`, so
    /// `{ "zoom": 0 }` resolves to the default zoom of 10.
    pub fn merge_over(&self, base: &MapConfig) -> MapConfig {
        MapConfig {
            center: self.center.unwrap_or(base.center),
            zoom: self.zoom.filter(|&zoom| zoom != 0).unwrap_or(base.zoom),
            map_type_id: self
                .map_type_id
                .clone()
                .unwrap_or_else(|| base.map_type_id.clone()),
        }
    }

    /// Merges this patch over [`MapConfig::default`].
    pub fn resolve(&self) -> MapConfig {
        self.merge_over(&MapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dimensions() {
        let dims = ChartConfig::default().dimensions();

        assert_eq!(dims.width, 600.0);
        assert_eq!(dims.height, 400.0);
        assert_eq!(dims.margin, Margin::new(20.0, 30.0, 40.0, 60.0));
        assert_eq!(dims.inner_width, 510.0);
        assert_eq!(dims.inner_height, 340.0);
    }

    #[test]
    fn patch_overrides_only_set_fields() {
        let patch = ChartConfigPatch {
            height: Some(300.0),
            animate: Some(false),
            ..Default::default()
        };
        let config = patch.resolve();

        assert_eq!(config.width, 600.0);
        assert_eq!(config.height, 300.0);
        assert!(!config.animate);
        assert_eq!(config.palette(), color::default_palette());
    }

    #[test]
    fn margin_is_replaced_as_a_whole() {
        let config = ChartConfig::from_json(
            r#"{ "margin": { "top": 0, "right": 0, "bottom": 0, "left": 0 } }"#,
        )
        .unwrap();

        assert_eq!(config.dimensions().inner_width, 600.0);
        assert_eq!(config.dimensions().inner_height, 400.0);
    }

    #[test]
    fn partial_margin_is_rejected() {
        let err = ChartConfig::from_json(r#"{ "margin": { "top": 5 } }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ChartConfig::from_json(r#"{ "widht": 10 }"#).is_err());
        assert!(MapConfig::from_json(r#"{ "zom": 3 }"#).is_err());
    }

    #[test]
    fn negative_inner_size_passes_through() {
        let dims = compute_dimensions(&ChartConfigPatch {
            width: Some(50.0),
            height: Some(30.0),
            ..Default::default()
        });

        assert_eq!(dims.inner_width, -40.0);
        assert_eq!(dims.inner_height, -30.0);
        assert!(matches!(
            dims.validate(),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn empty_palette_uses_default() {
        let config = ChartConfig::from_json(r#"{ "colors": [] }"#).unwrap();
        assert_eq!(config.palette(), color::default_palette());
    }

    #[test]
    fn map_defaults_and_patch() {
        let config = MapConfig::default();
        assert_eq!(config.center, LatLng::new(40.7128, -74.006));
        assert_eq!(config.zoom, 10);
        assert_eq!(config.map_type_id, "roadmap");

        let patched = MapConfig::from_json(
            r#"{ "center": { "lat": 51.5074, "lng": -0.1278 }, "mapTypeId": "satellite" }"#,
        )
        .unwrap();
        assert_eq!(patched.center, LatLng::new(51.5074, -0.1278));
        assert_eq!(patched.zoom, 10);
        assert_eq!(patched.map_type_id, "satellite");
    }

    #[test]
    fn zero_zoom_falls_back_to_default() {
        let config = MapConfig::from_json(r#"{ "zoom": 0 }"#).unwrap();
        assert_eq!(config.zoom, 10);

        let base = MapConfig {
            zoom: 7,
            ..MapConfig::default()
        };
        let patch = MapConfigPatch {
            zoom: Some(0),
            ..Default::default()
        };
        assert_eq!(patch.merge_over(&base).zoom, 7);
    }
}
