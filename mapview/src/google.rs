//! Google Maps JS SDK binding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SDK is injected by the client as a `<script>` tag and lives on
//! `window.google.maps`. Everything here is a thin `wasm-bindgen` import of
//! the handful of classes the map view needs, plus [`GoogleMap`], the
//! [`MapWidget`] implementation that `MapCore` drives in the browser.
//!
//! DESIGN
//! ======
//! Options objects are built with `serde_json` and handed to `JSON.parse`, so
//! the literal shapes stay readable and reuse the `serde` forms of
//! [`LatLng`] and [`LatLngBounds`]. Listener registrations are owned by
//! [`ListenerGuard`]s and removed when their owner goes away.

use std::cell::RefCell;
use std::rc::Rc;

use annotations::{AnnotationId, DrawingMode, LatLng, LatLngBounds, Marker, Polygon};
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::{MapViewConfig, ShapeStyle};
use crate::event::MapEvent;
use crate::widget::{MapWidget, PinHandle, ShapeHandle, WidgetError};

/// Global path that must resolve before a map can be built.
const SDK_PATH: [&str; 3] = ["google", "maps", "drawing"];

#[wasm_bindgen]
extern "C" {
    /// `google.maps.MapsEventListener`
    pub type MapsEventListener;

    #[wasm_bindgen(method)]
    fn remove(this: &MapsEventListener);

    /// `google.maps.LatLng`
    type JsLatLng;

    #[wasm_bindgen(method)]
    fn lat(this: &JsLatLng) -> f64;

    #[wasm_bindgen(method)]
    fn lng(this: &JsLatLng) -> f64;

    /// `google.maps.MVCArray<LatLng>`
    type JsPath;

    #[wasm_bindgen(method, js_name = getArray)]
    fn get_array(this: &JsPath) -> js_sys::Array;
}

#[wasm_bindgen(js_namespace = ["google", "maps"])]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    type JsMap;

    #[wasm_bindgen(constructor, js_class = "Map", catch)]
    fn new(element: &web_sys::HtmlElement, options: &JsValue) -> Result<JsMap, JsValue>;

    #[wasm_bindgen(method, js_class = "Map", js_name = fitBounds)]
    fn fit_bounds(this: &JsMap, bounds: &JsValue);

    /// `google.maps.Marker`
    #[wasm_bindgen(js_name = Marker)]
    pub type JsMarker;

    #[wasm_bindgen(constructor, js_class = "Marker")]
    fn new(options: &JsValue) -> JsMarker;

    #[wasm_bindgen(method, js_class = "Marker", js_name = setMap)]
    fn set_map(this: &JsMarker, map: Option<&JsMap>);

    #[wasm_bindgen(method, js_class = "Marker", js_name = getPosition)]
    fn get_position(this: &JsMarker) -> Option<JsLatLng>;

    #[wasm_bindgen(method, js_class = "Marker", js_name = setPosition)]
    fn set_position(this: &JsMarker, position: &JsValue);

    /// `google.maps.Polygon`
    #[wasm_bindgen(js_name = Polygon)]
    pub type JsPolygon;

    #[wasm_bindgen(constructor, js_class = "Polygon")]
    fn new(options: &JsValue) -> JsPolygon;

    #[wasm_bindgen(method, js_class = "Polygon", js_name = setMap)]
    fn set_map(this: &JsPolygon, map: Option<&JsMap>);

    #[wasm_bindgen(method, js_class = "Polygon", js_name = getPath)]
    fn get_path(this: &JsPolygon) -> JsPath;

    #[wasm_bindgen(method, js_class = "Polygon", js_name = setPath)]
    fn set_path(this: &JsPolygon, path: &JsValue);
}

#[wasm_bindgen(js_namespace = ["google", "maps", "drawing"])]
extern "C" {
    #[wasm_bindgen(js_name = DrawingManager)]
    type JsDrawingManager;

    #[wasm_bindgen(constructor, js_class = "DrawingManager")]
    fn new(options: &JsValue) -> JsDrawingManager;

    #[wasm_bindgen(method, js_class = "DrawingManager", js_name = setMap)]
    fn set_map(this: &JsDrawingManager, map: Option<&JsMap>);

    #[wasm_bindgen(method, js_class = "DrawingManager", js_name = setDrawingMode)]
    fn set_drawing_mode(this: &JsDrawingManager, mode: Option<&str>);
}

#[wasm_bindgen(js_namespace = ["google", "maps", "event"])]
extern "C" {
    #[wasm_bindgen(js_name = addListener)]
    fn add_listener(instance: &JsValue, event_name: &str, handler: &js_sys::Function) -> MapsEventListener;
}

/// Whether `window.google.maps.drawing` is available.
#[must_use]
pub fn sdk_loaded() -> bool {
    let mut current: JsValue = js_sys::global().into();
    for key in SDK_PATH {
        match js_sys::Reflect::get(&current, &JsValue::from_str(key)) {
            Ok(next) if next.is_object() => current = next,
            _ => return false,
        }
    }
    true
}

// =============================================================================
// Listeners
// =============================================================================

/// Keeps a listener's closure alive and unregisters it on drop.
pub struct ListenerGuard {
    listener: MapsEventListener,
    _closure: Closure<dyn FnMut(JsValue)>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.listener.remove();
    }
}

fn listen(target: &JsValue, event_name: &str, handler: impl FnMut(JsValue) + 'static) -> ListenerGuard {
    let closure = Closure::<dyn FnMut(JsValue)>::new(handler);
    let listener = add_listener(target, event_name, closure.as_ref().unchecked_ref());
    ListenerGuard { listener, _closure: closure }
}

/// Receives every event the widget raises.
pub type EventSink = Rc<dyn Fn(MapEvent<JsOverlay>)>;

// =============================================================================
// Conversions
// =============================================================================

fn to_js(value: &serde_json::Value) -> JsValue {
    match js_sys::JSON::parse(&value.to_string()) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::error!("options literal rejected by JSON.parse: {err:?}");
            js_sys::Object::new().into()
        }
    }
}

fn literal(point: LatLng) -> serde_json::Value {
    json!(point)
}

fn from_js(point: &JsLatLng) -> LatLng {
    LatLng::new(point.lat(), point.lng())
}

fn read_path(path: &JsPath) -> Vec<LatLng> {
    path.get_array()
        .iter()
        .map(|vertex| from_js(vertex.unchecked_ref::<JsLatLng>()))
        .collect()
}

fn polygon_options(style: &ShapeStyle) -> serde_json::Value {
    json!({
        "fillColor": style.fill_color,
        "fillOpacity": style.fill_opacity,
        "strokeColor": style.stroke_color,
        "strokeWeight": style.stroke_weight,
        "clickable": true,
        "editable": true,
        "draggable": true,
    })
}

// =============================================================================
// Handles
// =============================================================================

/// Finished drawing artifact, removed once its geometry is captured.
pub enum JsOverlay {
    Marker(JsMarker),
    Polygon(JsPolygon),
}

/// A rendered, draggable marker.
pub struct GooglePin {
    marker: JsMarker,
    listeners: RefCell<Vec<ListenerGuard>>,
}

impl PinHandle for GooglePin {
    fn position(&self) -> Option<LatLng> {
        self.marker.get_position().map(|p| from_js(&p))
    }

    fn set_position(&self, position: LatLng) {
        self.marker.set_position(&to_js(&literal(position)));
    }

    fn detach(&self) {
        self.listeners.borrow_mut().clear();
        self.marker.set_map(None);
    }
}

impl Drop for GooglePin {
    fn drop(&mut self) {
        self.detach();
    }
}

/// A rendered, editable polygon.
pub struct GoogleShape {
    polygon: JsPolygon,
    listeners: RefCell<Vec<ListenerGuard>>,
}

impl ShapeHandle for GoogleShape {
    fn path(&self) -> Vec<LatLng> {
        read_path(&self.polygon.get_path())
    }

    fn set_path(&self, path: &[LatLng]) {
        self.polygon.set_path(&to_js(&json!(path)));
    }

    fn detach(&self) {
        self.listeners.borrow_mut().clear();
        self.polygon.set_map(None);
    }
}

impl Drop for GoogleShape {
    fn drop(&mut self) {
        self.detach();
    }
}

// =============================================================================
// Widget
// =============================================================================

/// A Google map with a drawing manager attached.
pub struct GoogleMap {
    map: JsMap,
    manager: JsDrawingManager,
    style: ShapeStyle,
    sink: EventSink,
    _listeners: Vec<ListenerGuard>,
}

impl GoogleMap {
    /// Build a map inside `element` and route its events to `sink`.
    ///
    /// # Errors
    ///
    /// Fails when the SDK has not finished loading or the `Map` constructor
    /// throws.
    pub fn mount(
        element: &web_sys::HtmlElement,
        config: &MapViewConfig,
        sink: EventSink,
    ) -> Result<Self, WidgetError> {
        if !sdk_loaded() {
            return Err(WidgetError::SdkUnavailable("google.maps.drawing"));
        }

        let map_options = json!({
            "center": literal(config.initial_center),
            "zoom": config.initial_zoom,
        });
        let map = JsMap::new(element, &to_js(&map_options)).map_err(|err| WidgetError::Js(format!("{err:?}")))?;

        let manager_options = json!({
            "drawingControl": false,
            "markerOptions": { "draggable": true },
            "polygonOptions": polygon_options(&config.polygon_style),
        });
        let manager = JsDrawingManager::new(&to_js(&manager_options));
        manager.set_map(Some(&map));

        let marker_sink = Rc::clone(&sink);
        let on_marker = listen(&manager, "markercomplete", move |value| {
            let marker: JsMarker = value.unchecked_into();
            let position = marker.get_position().map(|p| from_js(&p));
            marker_sink(MapEvent::MarkerComplete { overlay: JsOverlay::Marker(marker), position });
        });
        let polygon_sink = Rc::clone(&sink);
        let on_polygon = listen(&manager, "polygoncomplete", move |value| {
            let polygon: JsPolygon = value.unchecked_into();
            let path = read_path(&polygon.get_path());
            polygon_sink(MapEvent::PolygonComplete { overlay: JsOverlay::Polygon(polygon), path });
        });

        log::info!("google map mounted");
        Ok(Self { map, manager, style: config.polygon_style.clone(), sink, _listeners: vec![on_marker, on_polygon] })
    }

    /// Forward `event_name` on `target` as the event `make` builds for `id`.
    fn emit_on(
        &self,
        target: &JsValue,
        event_name: &str,
        make: fn(AnnotationId) -> MapEvent<JsOverlay>,
        id: AnnotationId,
    ) -> ListenerGuard {
        let sink = Rc::clone(&self.sink);
        listen(target, event_name, move |_| sink(make(id)))
    }
}

impl MapWidget for GoogleMap {
    type Overlay = JsOverlay;
    type Pin = GooglePin;
    type Shape = GoogleShape;

    fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.map.fit_bounds(&to_js(&json!(bounds)));
    }

    fn set_drawing_mode(&mut self, mode: DrawingMode) {
        let overlay_type = match mode {
            DrawingMode::Idle => None,
            DrawingMode::Point => Some("marker"),
            DrawingMode::Polygon => Some("polygon"),
        };
        self.manager.set_drawing_mode(overlay_type);
    }

    fn discard_overlay(&mut self, overlay: JsOverlay) {
        match overlay {
            JsOverlay::Marker(marker) => marker.set_map(None),
            JsOverlay::Polygon(polygon) => polygon.set_map(None),
        }
    }

    fn place_pin(&mut self, marker: &Marker) -> GooglePin {
        let options = json!({
            "position": literal(marker.position),
            "title": marker.name,
            "draggable": true,
        });
        let js = JsMarker::new(&to_js(&options));
        js.set_map(Some(&self.map));

        let id = marker.id;
        let sink = Rc::clone(&self.sink);
        let on_drag = listen(&js, "dragend", move |event| {
            let latlng = js_sys::Reflect::get(&event, &JsValue::from_str("latLng"));
            match latlng {
                Ok(value) if value.is_object() => {
                    let position = from_js(value.unchecked_ref::<JsLatLng>());
                    sink(MapEvent::MarkerDragEnd { id, position });
                }
                _ => log::warn!("dragend without latLng: id={id}"),
            }
        });
        let on_double_click = self.emit_on(&js, "dblclick", |id| MapEvent::MarkerDoubleClick { id }, id);

        GooglePin { marker: js, listeners: RefCell::new(vec![on_drag, on_double_click]) }
    }

    fn place_shape(&mut self, polygon: &Polygon) -> GoogleShape {
        let mut options = polygon_options(&self.style);
        options["paths"] = json!(polygon.path);
        let js = JsPolygon::new(&to_js(&options));
        js.set_map(Some(&self.map));

        let id = polygon.id;
        let listeners = vec![
            self.emit_on(&js, "mouseup", |id| MapEvent::PolygonEdited { id }, id),
            self.emit_on(&js, "dragend", |id| MapEvent::PolygonEdited { id }, id),
            self.emit_on(&js, "dblclick", |id| MapEvent::PolygonDoubleClick { id }, id),
        ];

        GoogleShape { polygon: js, listeners: RefCell::new(listeners) }
    }
}

impl Drop for GoogleMap {
    fn drop(&mut self) {
        self.manager.set_drawing_mode(None);
        self.manager.set_map(None);
    }
}
