//! Google Maps script injection.
//!
//! Appends a single `<script>` tag for the Maps JS API with the `drawing`
//! library and a global ready callback. The callback flips the shared
//! [`MapsLoadState`] to `Ready`; a script error flips it to `Failed`.
//! Requires a browser environment.

// The csr build encodes through js-sys, which needs a wasm host.
#[cfg(all(test, not(feature = "csr")))]
#[path = "maps_loader_test.rs"]
mod maps_loader_test;

use leptos::prelude::*;

use crate::state::maps::MapsLoadState;

/// Global function the SDK calls once it has finished loading.
pub const READY_CALLBACK: &str = "__mapnoteMapsReady";

/// `id` of the injected script element; guards against double injection.
pub const SCRIPT_ID: &str = "google-maps-script";

const SDK_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/js";
const LIBRARIES: &str = "drawing";

/// Full script URL for `api_key`.
pub fn script_url(api_key: &str) -> String {
    format!(
        "{SDK_ENDPOINT}?key={}&libraries={LIBRARIES}&callback={READY_CALLBACK}",
        encode_query_value(api_key)
    )
}

#[cfg(feature = "csr")]
fn encode_query_value(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

/// Percent-encode everything outside the RFC 3986 unreserved set. Native
/// stand-in for `encodeURIComponent`.
#[cfg(not(feature = "csr"))]
fn encode_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Start loading the SDK unless it is already present or on its way.
pub fn load(api_key: &str, state: RwSignal<MapsLoadState>) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::*;

        if mapview::google::sdk_loaded() {
            state.set(MapsLoadState::Ready);
            return;
        }
        let Some(window) = web_sys::window() else {
            log::error!("maps loader: no window");
            state.set(MapsLoadState::Failed);
            return;
        };
        let Some(document) = window.document() else {
            log::error!("maps loader: no document");
            state.set(MapsLoadState::Failed);
            return;
        };
        if document.get_element_by_id(SCRIPT_ID).is_some() {
            return;
        }

        let on_ready = Closure::<dyn FnMut()>::new(move || {
            log::info!("google maps sdk ready");
            state.set(MapsLoadState::Ready);
        });
        if let Err(err) = js_sys::Reflect::set(&window, &JsValue::from_str(READY_CALLBACK), on_ready.as_ref()) {
            log::error!("maps loader: cannot install ready callback: {err:?}");
            state.set(MapsLoadState::Failed);
            return;
        }
        on_ready.forget();

        let script = match document.create_element("script") {
            Ok(element) => element.unchecked_into::<web_sys::HtmlScriptElement>(),
            Err(err) => {
                log::error!("maps loader: cannot create script element: {err:?}");
                state.set(MapsLoadState::Failed);
                return;
            }
        };
        script.set_id(SCRIPT_ID);
        script.set_src(&script_url(api_key));
        script.set_async(true);

        let on_error = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            log::error!("google maps script failed to load");
            state.set(MapsLoadState::Failed);
        });
        script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();

        let Some(body) = document.body() else {
            log::error!("maps loader: no document body");
            state.set(MapsLoadState::Failed);
            return;
        };
        if let Err(err) = body.append_child(&script) {
            log::error!("maps loader: cannot append script: {err:?}");
            state.set(MapsLoadState::Failed);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api_key, state);
    }
}
