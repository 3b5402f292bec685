//! Events raised by the map widget.

use annotations::{AnnotationId, LatLng};

/// A widget event for [`crate::engine::MapCore::handle_event`].
///
/// `O` is the widget's transient drawing artifact: the throwaway overlay the
/// drawing tool leaves behind, which must be discarded once its geometry
/// has been captured.
#[derive(Debug, Clone)]
pub enum MapEvent<O> {
    /// The point tool finished. `position` is `None` if the widget could not
    /// report where the point landed.
    MarkerComplete { overlay: O, position: Option<LatLng> },
    /// The polygon tool closed a ring.
    PolygonComplete { overlay: O, path: Vec<LatLng> },
    /// A rendered pin was dropped at a new position.
    MarkerDragEnd { id: AnnotationId, position: LatLng },
    /// A rendered pin was double-clicked (or double-tapped).
    MarkerDoubleClick { id: AnnotationId },
    /// A rendered polygon changed shape: a vertex was released or the whole
    /// shape was dragged. The new path is read back from the live handle.
    PolygonEdited { id: AnnotationId },
    /// A rendered polygon was double-clicked (or double-tapped).
    PolygonDoubleClick { id: AnnotationId },
}
