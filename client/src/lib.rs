//! # client
//!
//! Leptos + WASM frontend for the map annotation tool.
//!
//! This crate contains the root component, context-provided state, the map
//! host that bridges Leptos effects to `mapview::MapCore`, the drawing
//! buttons, and the coordinates table. All annotation rules live in the
//! `annotations` crate; components only turn DOM events into store updates.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;
