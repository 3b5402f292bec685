//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The annotation store itself lives in `annotations`; these are the small
//! UI-only models provided next to it as `RwSignal` contexts, plus the
//! link that lets the table reach the mounted map core.

pub mod map_link;
pub mod maps;
pub mod ui;
