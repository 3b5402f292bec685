//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the map and table surfaces while reading/writing the
//! shared `AnnotationStore` from Leptos context providers.

pub mod coordinates_table;
pub mod map_buttons;
pub mod map_host;
pub mod spinner;
pub mod table_panel;
pub mod table_tabs;
