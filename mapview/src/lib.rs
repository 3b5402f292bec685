//! Map view bridge between the annotation store and an interactive map widget.
//!
//! The widget (Google Maps in the browser) produces raw events: a drawing
//! gesture finished, a pin was dragged, a polygon vertex was released. This
//! crate turns those events into [`annotations::AnnotationStore`] mutations
//! and renders the store's canonical lists back onto the widget. The host
//! component in the client only wires DOM/SDK plumbing to [`engine::MapCore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::MapCore`]: event handling, sync, remount check |
//! | [`widget`] | The `MapWidget` contract and live handle traits |
//! | [`event`] | Widget events consumed by the core |
//! | [`handles`] | Id-to-handle side-table |
//! | [`config`] | Initial camera, reference region, shape style, workarounds |
//! | [`google`] | `wasm-bindgen` binding to the Google Maps JS SDK |

pub mod config;
pub mod engine;
pub mod event;
pub mod google;
pub mod handles;
pub mod widget;

pub use config::{MapViewConfig, ShapeStyle};
pub use engine::MapCore;
pub use event::MapEvent;
pub use widget::{MapWidget, PinHandle, ShapeHandle, WidgetError};
