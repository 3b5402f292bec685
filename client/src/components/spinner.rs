//! Loading indicator shown over the map area until the SDK is ready.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading map">
            <div class="spinner__ring"></div>
        </div>
    }
}
