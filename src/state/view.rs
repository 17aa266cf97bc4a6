/// View state machine
///
/// Exactly one view is active at a time. Every operation is defined for
/// every state; operations that do not apply are ignored, because host
/// events may arrive after the user has navigated elsewhere.

use super::data::ClothingItem;
use tracing::debug;

/// Top-level screens, without view-local sub-state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Wardrobe,
    Outfits,
    VirtualTryOn,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Wardrobe, ViewKind::Outfits, ViewKind::VirtualTryOn];

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Wardrobe => "Wardrobe",
            ViewKind::Outfits => "Outfits",
            ViewKind::VirtualTryOn => "Virtual Try-On",
        }
    }
}

/// Progress of the virtual try-on flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryOnStage {
    /// No photo yet; the upload prompt is shown
    AwaitingPhoto,
    /// A photo was supplied. `suggestion_seed` pins which items are offered.
    PreviewReady {
        overlay: Option<ClothingItem>,
        suggestion_seed: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Wardrobe,
    Outfits,
    VirtualTryOn(TryOnStage),
}

impl ViewState {
    pub fn kind(&self) -> ViewKind {
        match self {
            ViewState::Wardrobe => ViewKind::Wardrobe,
            ViewState::Outfits => ViewKind::Outfits,
            ViewState::VirtualTryOn(_) => ViewKind::VirtualTryOn,
        }
    }

    /// Unconditional transition. Any try-on preview is discarded.
    pub fn switch_to(&mut self, view: ViewKind) {
        *self = match view {
            ViewKind::Wardrobe => ViewState::Wardrobe,
            ViewKind::Outfits => ViewState::Outfits,
            ViewKind::VirtualTryOn => ViewState::VirtualTryOn(TryOnStage::AwaitingPhoto),
        };
    }

    /// A selfie arrived. Only meaningful while in the try-on view.
    pub fn photo_supplied(&mut self, suggestion_seed: u64) {
        match self {
            ViewState::VirtualTryOn(stage) => {
                *stage = TryOnStage::PreviewReady {
                    overlay: None,
                    suggestion_seed,
                };
            }
            ViewState::Wardrobe | ViewState::Outfits => {
                debug!(view = ?self.kind(), "ignoring photo outside try-on view");
            }
        }
    }

    /// Put a garment over the preview. Only meaningful once a preview exists.
    pub fn overlay_requested(&mut self, item: ClothingItem) {
        match self {
            ViewState::VirtualTryOn(TryOnStage::PreviewReady { overlay, .. }) => {
                *overlay = Some(item);
            }
            ViewState::VirtualTryOn(TryOnStage::AwaitingPhoto)
            | ViewState::Wardrobe
            | ViewState::Outfits => {
                debug!(item = %item.id, "ignoring overlay without a preview");
            }
        }
    }

    pub fn is_awaiting_photo(&self) -> bool {
        matches!(self, ViewState::VirtualTryOn(TryOnStage::AwaitingPhoto))
    }

    /// Current overlay, if a preview with an overlay is showing
    pub fn overlay(&self) -> Option<&ClothingItem> {
        match self {
            ViewState::VirtualTryOn(TryOnStage::PreviewReady { overlay, .. }) => overlay.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Category;

    fn shirt() -> ClothingItem {
        ClothingItem::new("item-1", Some("Blue T-Shirt"), Category::Tops, "shirt.png")
    }

    fn preview(overlay: Option<ClothingItem>) -> ViewState {
        ViewState::VirtualTryOn(TryOnStage::PreviewReady {
            overlay,
            suggestion_seed: 5,
        })
    }

    fn every_state() -> Vec<ViewState> {
        vec![
            ViewState::Wardrobe,
            ViewState::Outfits,
            ViewState::VirtualTryOn(TryOnStage::AwaitingPhoto),
            preview(None),
            preview(Some(shirt())),
        ]
    }

    #[test]
    fn test_initial_state_is_wardrobe() {
        assert_eq!(ViewState::default(), ViewState::Wardrobe);
    }

    #[test]
    fn test_switch_to_is_total_and_resets_preview() {
        for start in every_state() {
            for target in ViewKind::ALL {
                let mut state = start.clone();
                state.switch_to(target);
                assert_eq!(state.kind(), target);
                if target == ViewKind::VirtualTryOn {
                    assert!(state.is_awaiting_photo());
                }
            }
        }

        let mut state = preview(Some(shirt()));
        state.switch_to(ViewKind::Wardrobe);
        assert_eq!(state, ViewState::Wardrobe);
    }

    #[test]
    fn test_photo_supplied_outside_try_on_is_noop() {
        for mut state in [ViewState::Wardrobe, ViewState::Outfits] {
            let before = state.clone();
            state.photo_supplied(1);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_photo_supplied_moves_to_preview() {
        let mut state = ViewState::VirtualTryOn(TryOnStage::AwaitingPhoto);
        state.photo_supplied(42);
        assert_eq!(
            state,
            ViewState::VirtualTryOn(TryOnStage::PreviewReady {
                overlay: None,
                suggestion_seed: 42
            })
        );
    }

    #[test]
    fn test_second_photo_refreshes_preview() {
        let mut state = preview(Some(shirt()));
        state.photo_supplied(9);
        assert_eq!(
            state,
            ViewState::VirtualTryOn(TryOnStage::PreviewReady {
                overlay: None,
                suggestion_seed: 9
            })
        );
    }

    #[test]
    fn test_overlay_when_not_applicable_is_noop() {
        for mut state in [
            ViewState::Wardrobe,
            ViewState::Outfits,
            ViewState::VirtualTryOn(TryOnStage::AwaitingPhoto),
        ] {
            let before = state.clone();
            state.overlay_requested(shirt());
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_overlay_replaces_selection() {
        let mut state = preview(None);
        state.overlay_requested(shirt());
        assert_eq!(state.overlay(), Some(&shirt()));

        let jeans = ClothingItem::new("item-2", Some("Black Jeans"), Category::Bottoms, "jeans.png");
        state.overlay_requested(jeans.clone());
        assert_eq!(state.overlay(), Some(&jeans));
    }
}
