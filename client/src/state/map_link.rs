//! Shared access to the mounted map core.
//!
//! The map host owns the core; the table is a sibling, so the link is
//! provided from `App` and filled in by the host once a widget is mounted.
//! Table deletes route through it so the data entry and its widget handle
//! leave in the same mutation.

#[cfg(test)]
#[path = "map_link_test.rs"]
mod map_link_test;

use annotations::{AnnotationId, AnnotationKind, AnnotationStore};

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use mapview::{MapCore, google::GoogleMap};
#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

/// Slot holding the live core, empty until the SDK is ready.
#[cfg(feature = "csr")]
pub type CoreSlot = Rc<RefCell<Option<MapCore<GoogleMap>>>>;

/// Copyable handle to the map core slot, provided as context.
#[derive(Clone, Copy)]
pub struct MapLink {
    #[cfg(feature = "csr")]
    slot: StoredValue<CoreSlot, LocalStorage>,
}

impl MapLink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "csr")]
            slot: StoredValue::new_local(Rc::new(RefCell::new(None))),
        }
    }

    #[cfg(feature = "csr")]
    #[must_use]
    pub fn slot(&self) -> CoreSlot {
        self.slot.get_value()
    }

    /// Delete an annotation, detaching its widget handle when a map is mounted.
    ///
    /// Falls back to a plain store delete with no map (or while the core is
    /// busy); the next sync then prunes any stale handle.
    pub fn delete(&self, store: &mut AnnotationStore, kind: AnnotationKind, id: &AnnotationId) -> bool {
        #[cfg(feature = "csr")]
        {
            let slot = self.slot();
            if let Ok(mut current) = slot.try_borrow_mut() {
                if let Some(core) = current.as_mut() {
                    return core.delete(store, kind, id);
                }
            } else {
                log::warn!("map view busy; deleting without handle detach: id={id}");
            }
        }
        store.delete(kind, id)
    }
}

impl Default for MapLink {
    fn default() -> Self {
        Self::new()
    }
}
