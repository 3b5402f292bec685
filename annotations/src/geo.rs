//! Geographic primitives shared by the store, the table, and the map view.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use serde::{Deserialize, Serialize};

/// Lowest valid latitude in degrees.
pub const LATITUDE_MIN: f64 = -90.0;
/// Highest valid latitude in degrees.
pub const LATITUDE_MAX: f64 = 90.0;
/// Lowest valid longitude in degrees.
pub const LONGITUDE_MIN: f64 = -180.0;
/// Highest valid longitude in degrees.
pub const LONGITUDE_MAX: f64 = 180.0;

/// A geographic coordinate in decimal degrees.
///
/// Serializes as `{"lat": .., "lng": ..}`, the literal form the map widget
/// accepts wherever it expects a position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether both components lie inside their valid ranges.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_latitude(self.latitude) && is_valid_longitude(self.longitude)
    }
}

/// Axis-aligned geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// South-west corner.
    #[must_use]
    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    /// North-east corner.
    #[must_use]
    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    /// Midpoint of the box. Does not handle boxes crossing the antimeridian.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new((self.north + self.south) / 2.0, (self.west + self.east) / 2.0)
    }

    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        (self.south..=self.north).contains(&point.latitude) && (self.west..=self.east).contains(&point.longitude)
    }
}

/// Continental United States: the fixed region the map fits on first load.
pub const CONTINENTAL_US: LatLngBounds = LatLngBounds { north: 49.38, south: 24.52, west: -125.0, east: -66.95 };

/// Finite and within [-90, 90].
#[must_use]
pub fn is_valid_latitude(value: f64) -> bool {
    value.is_finite() && (LATITUDE_MIN..=LATITUDE_MAX).contains(&value)
}

/// Finite and within [-180, 180].
#[must_use]
pub fn is_valid_longitude(value: f64) -> bool {
    value.is_finite() && (LONGITUDE_MIN..=LONGITUDE_MAX).contains(&value)
}
