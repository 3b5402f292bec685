//! Table-view rules: row projection, coordinate display, and validated edits.
//!
//! The table renders one row per marker or per polygon depending on the
//! active tab. Coordinates are shown with four fractional digits. Numeric
//! edits pass through [`parse_coordinate`] before they reach the store; a
//! rejected edit issues no mutation and the input falls back to the last
//! committed value.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::geo::{LATITUDE_MAX, LATITUDE_MIN, LONGITUDE_MAX, LONGITUDE_MIN, LatLng};
use crate::model::{AnnotationId, AnnotationKind};
use crate::store::AnnotationStore;

/// Fractional digits shown for every coordinate.
pub const COORDINATE_PRECISION: usize = 4;

/// Which collection the table is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableTab {
    #[default]
    Polygons,
    Markers,
}

impl TableTab {
    /// Tab caption.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Polygons => "Polygons management",
            Self::Markers => "Markers management",
        }
    }

    #[must_use]
    pub fn kind(self) -> AnnotationKind {
        match self {
            Self::Polygons => AnnotationKind::Polygon,
            Self::Markers => AnnotationKind::Marker,
        }
    }
}

/// One coordinate component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    #[must_use]
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Latitude => (LATITUDE_MIN, LATITUDE_MAX),
            Self::Longitude => (LONGITUDE_MIN, LONGITUDE_MAX),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }

    #[must_use]
    pub fn read(self, point: LatLng) -> f64 {
        match self {
            Self::Latitude => point.latitude,
            Self::Longitude => point.longitude,
        }
    }

    #[must_use]
    pub fn write(self, point: LatLng, value: f64) -> LatLng {
        match self {
            Self::Latitude => LatLng { latitude: value, ..point },
            Self::Longitude => LatLng { longitude: value, ..point },
        }
    }
}

/// The coordinate a numeric cell edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellTarget {
    /// A marker's position.
    Marker(AnnotationId),
    /// One vertex of a polygon's path.
    Vertex { polygon: AnnotationId, index: usize },
}

/// Rejected numeric cell input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    #[error("{input:?} is not a number")]
    NotANumber { input: String },
    #[error("{axis} {value} is outside [{min}, {max}]")]
    OutOfRange { axis: &'static str, value: f64, min: f64, max: f64 },
}

/// A display row for either kind of annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: AnnotationId,
    pub kind: AnnotationKind,
    pub name: String,
    /// One entry for a marker, one per vertex for a polygon.
    pub coordinates: Vec<LatLng>,
}

impl TableRow {
    /// Read-only coordinate column text.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.kind {
            AnnotationKind::Marker => self.coordinates.first().map(format_position).unwrap_or_default(),
            AnnotationKind::Polygon => format_path(&self.coordinates),
        }
    }

    /// The editable numeric cells of this row, in display order.
    #[must_use]
    pub fn cell_targets(&self) -> Vec<CellTarget> {
        match self.kind {
            AnnotationKind::Marker => vec![CellTarget::Marker(self.id)],
            AnnotationKind::Polygon => (0..self.coordinates.len())
                .map(|index| CellTarget::Vertex { polygon: self.id, index })
                .collect(),
        }
    }

    /// Committed text of one numeric cell, or `None` if `target` is not in this row.
    #[must_use]
    pub fn cell_text(&self, target: CellTarget, axis: Axis) -> Option<String> {
        let point = match (self.kind, target) {
            (AnnotationKind::Marker, CellTarget::Marker(id)) if id == self.id => self.coordinates.first(),
            (AnnotationKind::Polygon, CellTarget::Vertex { polygon, index }) if polygon == self.id => {
                self.coordinates.get(index)
            }
            _ => None,
        }?;
        Some(format_coordinate(axis.read(*point)))
    }
}

/// Rows for the given tab, in store order.
#[must_use]
pub fn rows(store: &AnnotationStore, tab: TableTab) -> Vec<TableRow> {
    match tab {
        TableTab::Markers => store
            .markers()
            .iter()
            .map(|m| TableRow {
                id: m.id,
                kind: AnnotationKind::Marker,
                name: m.name.clone(),
                coordinates: vec![m.position],
            })
            .collect(),
        TableTab::Polygons => store
            .polygons()
            .iter()
            .map(|p| TableRow {
                id: p.id,
                kind: AnnotationKind::Polygon,
                name: p.name.clone(),
                coordinates: p.path.clone(),
            })
            .collect(),
    }
}

/// The row for one annotation, or `None` once it has been deleted.
#[must_use]
pub fn row(store: &AnnotationStore, kind: AnnotationKind, id: &AnnotationId) -> Option<TableRow> {
    match kind {
        AnnotationKind::Marker => store.marker(id).map(|m| TableRow {
            id: m.id,
            kind,
            name: m.name.clone(),
            coordinates: vec![m.position],
        }),
        AnnotationKind::Polygon => store.polygon(id).map(|p| TableRow {
            id: p.id,
            kind,
            name: p.name.clone(),
            coordinates: p.path.clone(),
        }),
    }
}

/// A single coordinate with the table's fixed precision.
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    format!("{:.*}", COORDINATE_PRECISION, value)
}

/// `"40.0000° N, -75.0000° W"`. The hemisphere letters are column labels;
/// the sign carries the direction.
#[must_use]
pub fn format_position(point: &LatLng) -> String {
    format!(
        "{}° N, {}° W",
        format_coordinate(point.latitude),
        format_coordinate(point.longitude)
    )
}

/// `"Point 1: ..; Point 2: .."` for a polygon path.
#[must_use]
pub fn format_path(path: &[LatLng]) -> String {
    path.iter()
        .enumerate()
        .map(|(i, point)| format!("Point {}: {}", i + 1, format_position(point)))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse and range-check one numeric cell.
///
/// # Errors
///
/// [`EditError::NotANumber`] for blank, non-numeric, or non-finite input;
/// [`EditError::OutOfRange`] when the value lies outside the axis range.
pub fn parse_coordinate(axis: Axis, raw: &str) -> Result<f64, EditError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| EditError::NotANumber { input: raw.to_owned() })?;
    if !value.is_finite() {
        return Err(EditError::NotANumber { input: raw.to_owned() });
    }
    let (min, max) = axis.range();
    if !(min..=max).contains(&value) {
        return Err(EditError::OutOfRange { axis: axis.label(), value, min, max });
    }
    Ok(value)
}

/// Validate `raw` and write it into the targeted coordinate.
///
/// Returns `Ok(false)` when the target no longer exists (lenient lookup).
///
/// # Errors
///
/// Any [`parse_coordinate`] error; the store is not touched.
pub fn commit_coordinate_edit(
    store: &mut AnnotationStore,
    target: CellTarget,
    axis: Axis,
    raw: &str,
) -> Result<bool, EditError> {
    let value = parse_coordinate(axis, raw).inspect_err(|err| log::warn!("coordinate edit rejected: {err}"))?;
    let applied = match target {
        CellTarget::Marker(id) => {
            let Some(current) = store.marker(&id).map(|m| m.position) else {
                return Ok(false);
            };
            store.update_marker_position(&id, axis.write(current, value))
        }
        CellTarget::Vertex { polygon, index } => {
            let Some(current) = store.polygon(&polygon).and_then(|p| p.path.get(index).copied()) else {
                return Ok(false);
            };
            store.update_polygon_vertex(&polygon, index, axis.write(current, value))
        }
    };
    Ok(applied)
}

/// Current value of a cell as display text, or `None` if the target is gone.
#[must_use]
pub fn committed_cell_text(store: &AnnotationStore, target: CellTarget, axis: Axis) -> Option<String> {
    let point = match target {
        CellTarget::Marker(id) => store.marker(&id).map(|m| m.position),
        CellTarget::Vertex { polygon, index } => store.polygon(&polygon).and_then(|p| p.path.get(index).copied()),
    }?;
    Some(format_coordinate(axis.read(point)))
}
