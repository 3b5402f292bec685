//! Map view configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use annotations::geo::CONTINENTAL_US;
use annotations::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

/// Geographic center of the contiguous United States.
pub const DEFAULT_CENTER: LatLng = LatLng { latitude: 37.0902, longitude: -95.7129 };

/// Zoom level that shows the whole reference region on a half-width map.
pub const DEFAULT_ZOOM: u8 = 4;

/// Stroke and fill for drawn and rendered polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeStyle {
    pub fill_color: String,
    pub stroke_color: String,
    pub fill_opacity: f64,
    pub stroke_weight: u32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill_color: "#2196F3".to_owned(),
            stroke_color: "#2196F3".to_owned(),
            fill_opacity: 0.4,
            stroke_weight: 2,
        }
    }
}

/// How the map view starts up and renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewConfig {
    /// Region the camera fits on first load.
    pub reference_bounds: LatLngBounds,
    /// Camera center before the first fit.
    pub initial_center: LatLng,
    /// Camera zoom before the first fit.
    pub initial_zoom: u8,
    /// Rebuild the widget whenever the store's render epoch moves.
    ///
    /// Google Maps keeps internal references to polygons removed while they
    /// are editable; a fresh widget is the only reliable way to drop them.
    /// Widgets that detach cleanly can turn this off.
    pub remount_on_delete: bool,
    pub polygon_style: ShapeStyle,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            reference_bounds: CONTINENTAL_US,
            initial_center: DEFAULT_CENTER,
            initial_zoom: DEFAULT_ZOOM,
            remount_on_delete: true,
            polygon_style: ShapeStyle::default(),
        }
    }
}
