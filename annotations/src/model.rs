//! Annotation entities and the transient drawing-tool state.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::LatLng;

/// Unique identifier for a marker or polygon.
pub type AnnotationId = Uuid;

/// Minimum number of vertices in a polygon path.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Which collection an annotation lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Marker,
    Polygon,
}

impl AnnotationKind {
    /// Prefix used for generated default names.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Marker => "Marker",
            Self::Polygon => "Polygon",
        }
    }
}

/// A single-point annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Assigned at creation, never changes.
    pub id: AnnotationId,
    /// Display name; any string, including empty.
    pub name: String,
    pub position: LatLng,
}

/// A closed multi-vertex area annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Assigned at creation, never changes.
    pub id: AnnotationId,
    /// Display name; any string, including empty.
    pub name: String,
    /// Ordered vertices; always at least [`MIN_POLYGON_VERTICES`] long.
    pub path: Vec<LatLng>,
}

impl Polygon {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.path.len()
    }
}

/// The creation tool currently armed on the map, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    /// No shape is being created.
    #[default]
    Idle,
    /// The next click drops a marker.
    Point,
    /// Clicks add polygon vertices until the ring is closed.
    Polygon,
}

impl DrawingMode {
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}
