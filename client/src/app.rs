//! Root application component and context providers.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Title, provide_meta_context};

use annotations::AnnotationStore;

use crate::components::map_host::MapHost;
use crate::components::table_panel::TablePanel;
use crate::config::AppConfig;
use crate::state::{map_link::MapLink, maps::MapsLoadState, ui::UiState};
use crate::util::maps_loader;

/// Root application component.
///
/// Provides the annotation store and UI state as contexts, starts loading
/// the Maps SDK, and lays out the map beside the table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(AnnotationStore::new());
    let maps = RwSignal::new(MapsLoadState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(store);
    provide_context(maps);
    provide_context(ui);
    provide_context(MapLink::new());

    let map_area = match AppConfig::from_build_env() {
        Ok(config) => {
            maps_loader::load(&config.maps_api_key, maps);
            provide_context(config);
            view! { <MapHost/> }.into_any()
        }
        Err(err) => {
            log::error!("configuration error: {err}");
            view! { <ConfigNotice message=err.to_string()/> }.into_any()
        }
    };

    view! {
        <Title text="Map annotations"/>
        <main class="app">
            <div class="app__map">{map_area}</div>
            <div class="app__table">
                <TablePanel/>
            </div>
        </main>
    }
}

/// Shown in place of the map when the build carries no API key.
#[component]
fn ConfigNotice(message: String) -> impl IntoView {
    view! {
        <div class="config-notice" role="alert">
            <strong>"Map unavailable"</strong>
            <p>{message}</p>
        </div>
    }
}
