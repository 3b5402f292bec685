//! Widget-independent map view engine.
//!
//! `MapCore` owns a widget plus the side-tables of live pin and shape
//! handles. It is driven from two directions:
//!
//! - [`MapCore::handle_event`]: widget events become store mutations.
//! - [`MapCore::sync`]: the store's canonical lists are pushed back onto the
//!   widget (new annotations placed, edited ones moved, deleted ones detached).
//!
//! Everything here runs against the [`MapWidget`] trait so it can be tested
//! without a browser.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use annotations::{AnnotationId, AnnotationKind, AnnotationStore, DrawingMode, Marker, Polygon};

use crate::config::MapViewConfig;
use crate::event::MapEvent;
use crate::handles::HandleTable;
use crate::widget::{MapWidget, PinHandle, ShapeHandle};

/// Map view state bound to one widget instance.
pub struct MapCore<W: MapWidget> {
    widget: W,
    config: MapViewConfig,
    pins: HandleTable<W::Pin>,
    shapes: HandleTable<W::Shape>,
    /// Render epoch this widget instance was built for.
    generation: u64,
    /// Drawing mode last pushed to the widget.
    applied_mode: DrawingMode,
}

impl<W: MapWidget> MapCore<W> {
    /// Bind a freshly constructed widget to the store's current epoch.
    pub fn new(widget: W, config: MapViewConfig, store: &AnnotationStore) -> Self {
        Self {
            widget,
            config,
            pins: HandleTable::new(),
            shapes: HandleTable::new(),
            generation: store.render_epoch(),
            applied_mode: DrawingMode::Idle,
        }
    }

    /// First-load camera placement: fit the fixed reference region.
    pub fn on_load(&mut self) {
        self.widget.fit_bounds(&self.config.reference_bounds);
    }

    // --- Widget -> store ---

    /// Apply one widget event to the store. Returns `true` if the store changed.
    pub fn handle_event(&mut self, store: &mut AnnotationStore, event: MapEvent<W::Overlay>) -> bool {
        match event {
            MapEvent::MarkerComplete { overlay, position } => {
                let changed = if let Some(position) = position {
                    let name = store.next_marker_name();
                    store.add_marker(position, name);
                    true
                } else {
                    log::warn!("point gesture finished without a position");
                    false
                };
                self.widget.discard_overlay(overlay);
                store.set_drawing_mode(DrawingMode::Idle);
                changed
            }
            MapEvent::PolygonComplete { overlay, path } => {
                let name = store.next_polygon_name();
                let changed = match store.add_polygon(path, name) {
                    Ok(_) => true,
                    Err(err) => {
                        log::warn!("drawn polygon dropped: {err}");
                        false
                    }
                };
                self.widget.discard_overlay(overlay);
                store.set_drawing_mode(DrawingMode::Idle);
                changed
            }
            MapEvent::MarkerDragEnd { id, position } => store.update_marker_position(&id, position),
            MapEvent::MarkerDoubleClick { id } => self.delete_marker(store, &id).is_some(),
            MapEvent::PolygonEdited { id } => self.read_back_path(store, &id),
            MapEvent::PolygonDoubleClick { id } => self.delete_polygon(store, &id).is_some(),
        }
    }

    /// Delete either kind of annotation together with its widget handle.
    /// Table-side deletes go through here while a map is mounted.
    pub fn delete(&mut self, store: &mut AnnotationStore, kind: AnnotationKind, id: &AnnotationId) -> bool {
        match kind {
            AnnotationKind::Marker => self.delete_marker(store, id).is_some(),
            AnnotationKind::Polygon => self.delete_polygon(store, id).is_some(),
        }
    }

    pub fn delete_marker(&mut self, store: &mut AnnotationStore, id: &AnnotationId) -> Option<Marker> {
        if let Some(pin) = self.pins.detach(id) {
            pin.detach();
        }
        store.delete_marker(id)
    }

    /// Delete a polygon together with its widget handle. The store bumps the
    /// render epoch in the same call.
    pub fn delete_polygon(&mut self, store: &mut AnnotationStore, id: &AnnotationId) -> Option<Polygon> {
        if let Some(shape) = self.shapes.detach(id) {
            shape.detach();
        }
        store.delete_polygon(id)
    }

    fn read_back_path(&mut self, store: &mut AnnotationStore, id: &AnnotationId) -> bool {
        let Some(shape) = self.shapes.get(id) else {
            log::debug!("edit for unregistered polygon handle ignored: id={id}");
            return false;
        };
        let path = shape.path();
        if store.polygon(id).is_some_and(|p| p.path == path) {
            return false;
        }
        match store.update_polygon_path(id, path) {
            Ok(applied) => applied,
            Err(err) => {
                log::warn!("polygon edit rejected: id={id}: {err}");
                if let Some(current) = store.polygon(id) {
                    shape.set_path(&current.path);
                }
                false
            }
        }
    }

    // --- Store -> widget ---

    /// Render the store onto the widget.
    ///
    /// Handles are registered here, before the widget can report an edit
    /// on them.
    pub fn sync(&mut self, store: &AnnotationStore) {
        for pin in self.pins.retain_live(|id| store.marker(id).is_some()) {
            pin.detach();
        }
        for shape in self.shapes.retain_live(|id| store.polygon(id).is_some()) {
            shape.detach();
        }

        for marker in store.markers() {
            if let Some(pin) = self.pins.get(&marker.id) {
                if pin.position() != Some(marker.position) {
                    pin.set_position(marker.position);
                }
                continue;
            }
            let pin = self.widget.place_pin(marker);
            if let Some(displaced) = self.pins.register(marker.id, pin) {
                displaced.detach();
            }
        }

        for polygon in store.polygons() {
            if let Some(shape) = self.shapes.get(&polygon.id) {
                if shape.path() != polygon.path {
                    shape.set_path(&polygon.path);
                }
                continue;
            }
            let shape = self.widget.place_shape(polygon);
            if let Some(displaced) = self.shapes.register(polygon.id, shape) {
                displaced.detach();
            }
        }

        let mode = store.drawing_mode();
        if mode != self.applied_mode {
            self.widget.set_drawing_mode(mode);
            self.applied_mode = mode;
        }
    }

    /// Whether the host must throw this widget away and build a new one.
    #[must_use]
    pub fn needs_remount(&self, store: &AnnotationStore) -> bool {
        self.config.remount_on_delete && store.render_epoch() != self.generation
    }

    /// Detach every handle and hand the widget back.
    pub fn teardown(mut self) -> W {
        for pin in self.pins.drain() {
            pin.detach();
        }
        for shape in self.shapes.drain() {
            shape.detach();
        }
        self.widget
    }

    // --- Queries ---

    #[must_use]
    pub fn widget(&self) -> &W {
        &self.widget
    }

    #[must_use]
    pub fn config(&self) -> &MapViewConfig {
        &self.config
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn pin(&self, id: &AnnotationId) -> Option<&W::Pin> {
        self.pins.get(id)
    }

    #[must_use]
    pub fn shape(&self, id: &AnnotationId) -> Option<&W::Shape> {
        self.shapes.get(id)
    }

    #[must_use]
    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}
