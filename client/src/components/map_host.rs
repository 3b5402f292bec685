//! Bridge component between Leptos state and the imperative `mapview::MapCore`.
//!
//! ARCHITECTURE
//! ============
//! `mapview` owns event translation and rendering rules; this host only
//! mounts a `GoogleMap` once the SDK is ready, forwards widget events into
//! the store signal, and re-syncs the widget whenever the store changes.
//!
//! DESIGN
//! ======
//! The core sits in the `MapLink` slot shared with the effect and the table. The
//! widget's event sink holds only a `Weak` to it, so the widget never keeps
//! its own owner alive. When the core reports `needs_remount` the old widget
//! is torn down and a fresh one is built in the same container.

use annotations::AnnotationStore;
use leptos::prelude::*;

use crate::components::map_buttons::MapButtons;
use crate::components::spinner::Spinner;
use crate::config::AppConfig;
use crate::state::maps::MapsLoadState;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::{Rc, Weak};

#[cfg(feature = "csr")]
use crate::state::map_link::{CoreSlot, MapLink};

#[cfg(feature = "csr")]
use mapview::MapCore;
#[cfg(feature = "csr")]
use mapview::google::{EventSink, GoogleMap};

/// Route widget events into the store through the live core.
#[cfg(feature = "csr")]
fn event_sink(core: Weak<RefCell<Option<MapCore<GoogleMap>>>>, store: RwSignal<AnnotationStore>) -> EventSink {
    Rc::new(move |event| {
        let Some(core) = core.upgrade() else {
            return;
        };
        let Ok(mut slot) = core.try_borrow_mut() else {
            log::warn!("map event dropped while the map view is busy");
            return;
        };
        let Some(engine) = slot.as_mut() else {
            return;
        };
        store.update(|s| {
            engine.handle_event(s, event);
        });
    })
}

/// Tear down a stale widget if needed, mount one if missing, then sync.
#[cfg(feature = "csr")]
fn mount_and_sync(
    slot: &CoreSlot,
    element: &web_sys::HtmlElement,
    config: &AppConfig,
    store: RwSignal<AnnotationStore>,
    snapshot: &AnnotationStore,
) {
    let mut current = slot.borrow_mut();

    if current.as_ref().is_some_and(|core| core.needs_remount(snapshot)) {
        if let Some(stale) = current.take() {
            log::debug!("remounting map after epoch {}", stale.generation());
            drop(stale.teardown());
        }
        element.set_inner_html("");
    }

    if current.is_none() {
        let sink = event_sink(Rc::downgrade(slot), store);
        match GoogleMap::mount(element, &config.map, sink) {
            Ok(widget) => {
                let mut core = MapCore::new(widget, config.map.clone(), snapshot);
                core.on_load();
                *current = Some(core);
            }
            Err(err) => {
                log::error!("map mount failed: {err}");
                return;
            }
        }
    }

    if let Some(core) = current.as_mut() {
        core.sync(snapshot);
    }
}

/// Map area: the widget container, drawing buttons, and the loading spinner.
#[component]
pub fn MapHost() -> impl IntoView {
    let store = expect_context::<RwSignal<AnnotationStore>>();
    let maps = expect_context::<RwSignal<MapsLoadState>>();
    let config = expect_context::<AppConfig>();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let slot = expect_context::<MapLink>().slot();
        let config = config.clone();
        Effect::new(move || {
            if !maps.get().is_ready() {
                return;
            }
            let Some(container) = container_ref.get() else {
                return;
            };
            store.with(|snapshot| mount_and_sync(&slot, &container, &config, store, snapshot));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    view! {
        <div class="map-host">
            <MapButtons/>
            <div class="map-host__canvas" node_ref=container_ref></div>
            <Show when=move || maps.get().shows_spinner()>
                <Spinner/>
            </Show>
        </div>
    }
}
