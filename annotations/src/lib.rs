//! Annotation state model for the map annotation tool.
//!
//! This crate owns everything that does not depend on a browser or on a
//! particular map widget: the marker and polygon types, the authoritative
//! [`store::AnnotationStore`], and the table-view rules for formatting and
//! validating coordinate edits. Both the map view (`mapview`) and the Leptos
//! client read from and mutate the same store.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geo`] | `LatLng`, bounding boxes, coordinate range checks |
//! | [`model`] | `Marker`, `Polygon`, `DrawingMode`, `AnnotationKind` |
//! | [`store`] | `AnnotationStore` and its mutation contract |
//! | [`table`] | Row projection, coordinate formatting, validated cell edits |

pub mod geo;
pub mod model;
pub mod store;
pub mod table;

pub use geo::{LatLng, LatLngBounds};
pub use model::{AnnotationId, AnnotationKind, DrawingMode, Marker, Polygon};
pub use store::{AnnotationStore, StoreError};
