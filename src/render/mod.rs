/// Render pipeline
///
/// `render` is a pure projection from state to a `ViewDescription`.
/// It always describes the whole active view; there is no diffing, so
/// calling it twice on the same inputs yields equal descriptions.

pub mod description;

use crate::state::catalog::Catalog;
use crate::state::data::{Category, ClothingItem};
use crate::state::outfits::OutfitStore;
use crate::state::selection::{random_one_from_each_category, SeededRandom};
use crate::state::view::{TryOnStage, ViewKind, ViewState};
use description::*;

const EMPTY_WARDROBE: &str =
    "Your wardrobe is empty! Tap the button below to add your first clothing item.";
const EMPTY_OUTFITS: &str =
    "No outfits generated yet! Tap the button below to create your first outfit.";
const NO_DESCRIPTION: &str = "No description";

/// Describe the active view
pub fn render(view: &ViewState, catalog: &Catalog, outfits: &OutfitStore) -> ViewDescription {
    let content = match view {
        ViewState::Wardrobe => Content::Wardrobe(render_wardrobe(catalog)),
        ViewState::Outfits => Content::Outfits(render_outfits(catalog, outfits)),
        ViewState::VirtualTryOn(stage) => Content::TryOn(render_try_on(stage, catalog)),
    };

    ViewDescription {
        navigation: navigation(view.kind()),
        main_button: main_button(view.kind()),
        content,
    }
}

/// Describe the details modal for one item, if it still exists
pub fn render_item_detail(id: &str, catalog: &Catalog) -> Option<ItemDetail> {
    let item = catalog.get(id)?;
    Some(ItemDetail {
        item: item_card(item),
        category_line: format!("Category: {}", item.category.name()),
        actions: vec![DetailAction::Edit, DetailAction::Remove, DetailAction::TryOn],
    })
}

fn navigation(active: ViewKind) -> Vec<NavTab> {
    ViewKind::ALL
        .into_iter()
        .map(|view| NavTab {
            view,
            label: view.label(),
            active: view == active,
        })
        .collect()
}

/// Context action of the host main button for a view
pub fn main_button(active: ViewKind) -> MainButton {
    match active {
        ViewKind::Wardrobe => MainButton {
            label: "Upload New Item",
            action: MainAction::UploadClothing,
        },
        ViewKind::Outfits => MainButton {
            label: "Generate Outfits",
            action: MainAction::GenerateOutfit,
        },
        ViewKind::VirtualTryOn => MainButton {
            label: "Start Virtual Try-On",
            action: MainAction::StartTryOn,
        },
    }
}

fn item_card(item: &ClothingItem) -> ItemCard {
    ItemCard {
        id: item.id.clone(),
        name: item.display_name().to_string(),
        image_url: item.image_url.clone(),
        alt: item.alt_text().to_string(),
    }
}

fn render_wardrobe(catalog: &Catalog) -> WardrobeContent {
    let sections = Category::ALL
        .into_iter()
        .map(|category| CategorySection {
            category,
            title: category.name(),
            items: catalog
                .filter_by_category(category)
                .into_iter()
                .map(item_card)
                .collect(),
        })
        .collect();

    WardrobeContent {
        sections,
        empty: catalog.is_empty().then_some(EmptyNotice {
            message: EMPTY_WARDROBE,
        }),
    }
}

fn render_outfits(catalog: &Catalog, outfits: &OutfitStore) -> OutfitsContent {
    if outfits.is_empty() {
        return OutfitsContent::Empty(EmptyNotice {
            message: EMPTY_OUTFITS,
        });
    }

    let cards = outfits
        .list()
        .iter()
        .map(|outfit| OutfitCard {
            id: outfit.id.clone(),
            title: outfit.title(),
            description: outfit
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            // Dangling references are skipped, never fatal
            collage: outfit
                .items
                .iter()
                .filter_map(|id| catalog.get(id))
                .map(|item| CollageTile {
                    item_id: item.id.clone(),
                    image_url: item.image_url.clone(),
                })
                .collect(),
        })
        .collect();

    OutfitsContent::Cards(cards)
}

fn render_try_on(stage: &TryOnStage, catalog: &Catalog) -> TryOnContent {
    match stage {
        TryOnStage::AwaitingPhoto => TryOnContent::UploadPrompt(UploadPrompt {
            title: "Virtual Try-On",
            instructions: "Upload a photo of yourself or choose one from your gallery",
            upload_label: "Upload Photo",
        }),
        TryOnStage::PreviewReady {
            overlay,
            suggestion_seed,
        } => {
            // Replaying the stored seed keeps the suggestions stable across renders
            let mut rng = SeededRandom::new(*suggestion_seed);
            let options = random_one_from_each_category(&Category::ALL, catalog, &mut rng)
                .iter()
                .filter_map(|id| catalog.get(id))
                .map(|item| PreviewOption {
                    category: item.category,
                    label: item.category.name(),
                    item: item_card(item),
                })
                .collect();

            TryOnContent::Preview(PreviewPanel {
                photo_url: SELFIE_PLACEHOLDER,
                overlay: overlay.as_ref().map(|item| OverlayLayer {
                    item_id: item.id.clone(),
                    image_url: item.image_url.clone(),
                    opacity_percent: OVERLAY_OPACITY_PERCENT,
                }),
                heading: "Select clothing to try on",
                options,
            })
        }
    }
}
