//! Authoritative annotation state.
//!
//! `AnnotationStore` is the single source of truth for markers, polygons,
//! the armed drawing tool, and the render epoch. The map view and the table
//! view never hold their own copies of annotation data: they call the
//! mutations below and re-render from the store's lists.
//!
//! Lookups by id are lenient. Mutating an id that is not present is a
//! silent no-op reported through the return value (`false` / `None`), never
//! an error: the caller is already looking at a consistent state.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use uuid::Uuid;

use crate::geo::LatLng;
use crate::model::{AnnotationId, AnnotationKind, DrawingMode, MIN_POLYGON_VERTICES, Marker, Polygon};

/// Rejected store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("polygon needs at least {MIN_POLYGON_VERTICES} vertices, got {vertices}")]
    DegeneratePolygon { vertices: usize },
}

/// In-memory store of annotations plus transient drawing state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationStore {
    markers: Vec<Marker>,
    polygons: Vec<Polygon>,
    drawing_mode: DrawingMode,
    render_epoch: u64,
    markers_created: u64,
    polygons_created: u64,
}

impl AnnotationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Creation ---

    /// Append a marker with a fresh id and disarm the drawing tool.
    pub fn add_marker(&mut self, position: LatLng, name: impl Into<String>) -> Marker {
        let marker = Marker { id: Uuid::new_v4(), name: name.into(), position };
        self.markers.push(marker.clone());
        self.markers_created += 1;
        self.drawing_mode = DrawingMode::Idle;
        log::debug!("marker added: id={} name={:?}", marker.id, marker.name);
        marker
    }

    /// Append a polygon with a fresh id and disarm the drawing tool.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DegeneratePolygon`] when `path` has fewer than
    /// three vertices. The store is left untouched, including the drawing mode.
    pub fn add_polygon(&mut self, path: Vec<LatLng>, name: impl Into<String>) -> Result<Polygon, StoreError> {
        check_path(&path)?;
        let polygon = Polygon { id: Uuid::new_v4(), name: name.into(), path };
        self.polygons.push(polygon.clone());
        self.polygons_created += 1;
        self.drawing_mode = DrawingMode::Idle;
        log::debug!("polygon added: id={} vertices={}", polygon.id, polygon.path.len());
        Ok(polygon)
    }

    /// Default name for the next marker: `"Marker N"`.
    ///
    /// `N` counts creations, not live markers, so names are not reissued
    /// after a deletion.
    #[must_use]
    pub fn next_marker_name(&self) -> String {
        format!("{} {}", AnnotationKind::Marker.label(), self.markers_created + 1)
    }

    /// Default name for the next polygon: `"Polygon N"`.
    #[must_use]
    pub fn next_polygon_name(&self) -> String {
        format!("{} {}", AnnotationKind::Polygon.label(), self.polygons_created + 1)
    }

    // --- Updates ---

    /// Move a marker. Returns `false` if no marker has this id.
    pub fn update_marker_position(&mut self, id: &AnnotationId, position: LatLng) -> bool {
        let Some(marker) = self.markers.iter_mut().find(|m| m.id == *id) else {
            return false;
        };
        marker.position = position;
        log::debug!("marker moved: id={id}");
        true
    }

    /// Rename a marker or polygon. Any string is accepted, including empty.
    pub fn rename(&mut self, kind: AnnotationKind, id: &AnnotationId, name: impl Into<String>) -> bool {
        let slot = match kind {
            AnnotationKind::Marker => self.markers.iter_mut().find(|m| m.id == *id).map(|m| &mut m.name),
            AnnotationKind::Polygon => self.polygons.iter_mut().find(|p| p.id == *id).map(|p| &mut p.name),
        };
        let Some(slot) = slot else {
            return false;
        };
        *slot = name.into();
        log::debug!("{} renamed: id={id}", kind.label());
        true
    }

    /// Replace a polygon's whole path, e.g. after a drag on the map.
    ///
    /// Returns `Ok(false)` if no polygon has this id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DegeneratePolygon`] when `path` has fewer than
    /// three vertices; the stored path is kept.
    pub fn update_polygon_path(&mut self, id: &AnnotationId, path: Vec<LatLng>) -> Result<bool, StoreError> {
        check_path(&path)?;
        let Some(polygon) = self.polygons.iter_mut().find(|p| p.id == *id) else {
            return Ok(false);
        };
        polygon.path = path;
        log::debug!("polygon path replaced: id={id} vertices={}", polygon.path.len());
        Ok(true)
    }

    /// Replace one vertex of a polygon. Returns `false` if the polygon or
    /// the vertex index does not exist.
    pub fn update_polygon_vertex(&mut self, id: &AnnotationId, index: usize, vertex: LatLng) -> bool {
        let Some(slot) = self
            .polygons
            .iter_mut()
            .find(|p| p.id == *id)
            .and_then(|p| p.path.get_mut(index))
        else {
            return false;
        };
        *slot = vertex;
        log::debug!("polygon vertex moved: id={id} index={index}");
        true
    }

    // --- Deletion ---

    /// Remove a marker, returning it if it was present.
    pub fn delete_marker(&mut self, id: &AnnotationId) -> Option<Marker> {
        let index = self.markers.iter().position(|m| m.id == *id)?;
        let marker = self.markers.remove(index);
        log::debug!("marker deleted: id={id}");
        Some(marker)
    }

    /// Remove a polygon and advance the render epoch by one.
    ///
    /// An unknown id leaves the epoch where it was.
    pub fn delete_polygon(&mut self, id: &AnnotationId) -> Option<Polygon> {
        let index = self.polygons.iter().position(|p| p.id == *id)?;
        let polygon = self.polygons.remove(index);
        self.render_epoch += 1;
        log::debug!("polygon deleted: id={id} epoch={}", self.render_epoch);
        Some(polygon)
    }

    /// Delete either kind of annotation by id.
    pub fn delete(&mut self, kind: AnnotationKind, id: &AnnotationId) -> bool {
        match kind {
            AnnotationKind::Marker => self.delete_marker(id).is_some(),
            AnnotationKind::Polygon => self.delete_polygon(id).is_some(),
        }
    }

    // --- Drawing mode ---

    /// Arm a tool, replacing any tool already armed, or disarm with `Idle`.
    pub fn set_drawing_mode(&mut self, mode: DrawingMode) {
        if self.drawing_mode != mode {
            log::debug!("drawing mode: {:?} -> {mode:?}", self.drawing_mode);
        }
        self.drawing_mode = mode;
    }

    /// Disarm the current tool without creating anything.
    pub fn cancel_drawing(&mut self) {
        self.set_drawing_mode(DrawingMode::Idle);
    }

    // --- Queries ---

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[must_use]
    pub fn marker(&self, id: &AnnotationId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == *id)
    }

    #[must_use]
    pub fn polygon(&self, id: &AnnotationId) -> Option<&Polygon> {
        self.polygons.iter().find(|p| p.id == *id)
    }

    #[must_use]
    pub fn drawing_mode(&self) -> DrawingMode {
        self.drawing_mode
    }

    /// Counter bumped by structural deletions; the map view remounts when it moves.
    #[must_use]
    pub fn render_epoch(&self) -> u64 {
        self.render_epoch
    }

    /// Total number of markers and polygons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len() + self.polygons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.polygons.is_empty()
    }
}

fn check_path(path: &[LatLng]) -> Result<(), StoreError> {
    if path.len() < MIN_POLYGON_VERTICES {
        log::warn!("rejected polygon path with {} vertices", path.len());
        return Err(StoreError::DegeneratePolygon { vertices: path.len() });
    }
    Ok(())
}
