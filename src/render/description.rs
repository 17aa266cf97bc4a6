/// Logical view tree produced by the render pipeline.
///
/// These types say WHAT must be displayed, never how it looks.
/// The presentation layer replaces its whole tree from a fresh
/// description after every mutation.

use crate::state::data::{Category, ItemId, OutfitId};
use crate::state::view::ViewKind;

/// Placeholder shown in place of the user's selfie
pub const SELFIE_PLACEHOLDER: &str = "https://via.placeholder.com/300x400";

/// Opacity of the garment overlay on the try-on preview, in percent
pub const OVERLAY_OPACITY_PERCENT: u8 = 70;

/// What the presentation layer shows on top of the active view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub view: ViewDescription,
    /// Item details modal, when an item is selected
    pub detail: Option<ItemDetail>,
}

/// Full description of the active view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescription {
    pub navigation: Vec<NavTab>,
    pub main_button: MainButton,
    pub content: Content,
}

impl ViewDescription {
    /// The tab currently marked active
    pub fn active_view(&self) -> Option<ViewKind> {
        self.navigation.iter().find(|tab| tab.active).map(|tab| tab.view)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    pub view: ViewKind,
    pub label: &'static str,
    pub active: bool,
}

/// Context action bound to the host's main button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    UploadClothing,
    GenerateOutfit,
    StartTryOn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainButton {
    pub label: &'static str,
    pub action: MainAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Wardrobe(WardrobeContent),
    Outfits(OutfitsContent),
    TryOn(TryOnContent),
}

/// Guidance text shown when there is nothing to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyNotice {
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardrobeContent {
    /// One section per category, in display order
    pub sections: Vec<CategorySection>,
    /// Present when the catalog has no items at all
    pub empty: Option<EmptyNotice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub category: Category,
    pub title: &'static str,
    pub items: Vec<ItemCard>,
}

/// A clickable garment tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: ItemId,
    pub name: String,
    pub image_url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutfitsContent {
    Empty(EmptyNotice),
    Cards(Vec<OutfitCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitCard {
    pub id: OutfitId,
    pub title: String,
    pub description: String,
    /// Resolved garments; references to deleted items are left out
    pub collage: Vec<CollageTile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollageTile {
    pub item_id: ItemId,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryOnContent {
    UploadPrompt(UploadPrompt),
    Preview(PreviewPanel),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPrompt {
    pub title: &'static str,
    pub instructions: &'static str,
    pub upload_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPanel {
    pub photo_url: &'static str,
    pub overlay: Option<OverlayLayer>,
    pub heading: &'static str,
    /// At most one pickable item per category
    pub options: Vec<PreviewOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayer {
    pub item_id: ItemId,
    pub image_url: String,
    pub opacity_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOption {
    pub category: Category,
    pub label: &'static str,
    pub item: ItemCard,
}

/// Item details modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    pub item: ItemCard,
    pub category_line: String,
    pub actions: Vec<DetailAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Edit,
    Remove,
    TryOn,
}

impl DetailAction {
    pub fn label(self) -> &'static str {
        match self {
            DetailAction::Edit => "Edit",
            DetailAction::Remove => "Remove",
            DetailAction::TryOn => "Try On",
        }
    }
}
