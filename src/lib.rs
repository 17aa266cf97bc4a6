//! Pocket Wardrobe core
//!
//! Catalog, outfit store, view state machine and render pipeline, plus the
//! host bridge through which uploads are requested and reported back.
//! The iced shell in `main.rs` is one host; anything that can forward
//! `HostEvent`s and draw a `Frame` can drive the same core.

pub mod config;
pub mod error;
pub mod host;
pub mod render;
pub mod state;
