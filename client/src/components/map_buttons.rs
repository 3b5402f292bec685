//! Floating drawing controls over the map.

use annotations::{AnnotationStore, DrawingMode};
use leptos::prelude::*;

/// "Draw polygon" and "Add marker" buttons, plus "Cancel" while a tool is armed.
#[component]
pub fn MapButtons() -> impl IntoView {
    let store = expect_context::<RwSignal<AnnotationStore>>();

    let mode = move || store.with(AnnotationStore::drawing_mode);
    let arm = move |next: DrawingMode| store.update(|s| s.set_drawing_mode(next));

    view! {
        <div class="map-buttons">
            <button
                class="map-buttons__btn"
                class:map-buttons__btn--active=move || mode() == DrawingMode::Polygon
                on:click=move |_| arm(DrawingMode::Polygon)
            >
                "Draw polygon"
            </button>
            <button
                class="map-buttons__btn"
                class:map-buttons__btn--active=move || mode() == DrawingMode::Point
                on:click=move |_| arm(DrawingMode::Point)
            >
                "Add marker"
            </button>
            <Show when=move || mode().is_active()>
                <button class="map-buttons__btn map-buttons__btn--cancel" on:click=move |_| store.update(AnnotationStore::cancel_drawing)>
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}
