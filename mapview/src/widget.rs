//! The contract a map widget must meet for [`crate::engine::MapCore`].
//!
//! The core never touches the widget's internals. It asks the widget to place
//! pins and shapes, keeps the returned handles in side-tables, and uses those
//! handles to read back interactive edits and to push programmatic changes.

use annotations::{DrawingMode, LatLng, LatLngBounds, Marker, Polygon};

/// Widget construction and SDK failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("map SDK is not loaded: {0} is undefined")]
    SdkUnavailable(&'static str),
    #[error("map widget call failed: {0}")]
    Js(String),
}

/// A live reference to a pin rendered on the widget.
pub trait PinHandle {
    /// Where the widget currently shows the pin.
    fn position(&self) -> Option<LatLng>;
    /// Move the pin without raising a drag event.
    fn set_position(&self, position: LatLng);
    /// Remove the pin from the widget. Further calls are no-ops.
    fn detach(&self);
}

/// A live reference to an editable polygon rendered on the widget.
pub trait ShapeHandle {
    /// The path as the widget currently holds it, including unsaved edits.
    fn path(&self) -> Vec<LatLng>;
    /// Replace the widget-side path.
    fn set_path(&self, path: &[LatLng]);
    /// Remove the shape from the widget. Further calls are no-ops.
    fn detach(&self);
}

/// An interactive map that can draw, render, and report edits.
pub trait MapWidget {
    /// Throwaway artifact produced by a finished drawing gesture.
    type Overlay;
    type Pin: PinHandle;
    type Shape: ShapeHandle;

    /// Move the camera so `bounds` fills the viewport.
    fn fit_bounds(&mut self, bounds: &LatLngBounds);

    /// Arm a drawing gesture, or disarm with [`DrawingMode::Idle`]. Switching
    /// discards any gesture in progress.
    fn set_drawing_mode(&mut self, mode: DrawingMode);

    /// Remove a drawing artifact once its geometry has been captured.
    fn discard_overlay(&mut self, overlay: Self::Overlay);

    /// Render a draggable pin for `marker`. Its drag and double-click events
    /// must carry `marker.id`.
    fn place_pin(&mut self, marker: &Marker) -> Self::Pin;

    /// Render an editable, draggable shape for `polygon`. Its edit and
    /// double-click events must carry `polygon.id`.
    fn place_shape(&mut self, polygon: &Polygon) -> Self::Shape;
}
