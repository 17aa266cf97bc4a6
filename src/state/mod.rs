/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The clothing catalog (catalog.rs) and outfit store (outfits.rs)
/// - Randomized selection with injected randomness (selection.rs)
/// - The view state machine (view.rs)
/// - The bundled demo wardrobe (sample.rs)
/// - The core that ties them together (wardrobe.rs)

pub mod catalog;
pub mod data;
pub mod outfits;
pub mod sample;
pub mod selection;
pub mod view;
pub mod wardrobe;
