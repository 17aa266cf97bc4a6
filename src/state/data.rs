/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the stores, the render pipeline and the host bridge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identity of a clothing item (e.g., "item-1")
pub type ItemId = String;

/// Identity of an outfit (e.g., "outfit-1712000000000")
pub type OutfitId = String;

/// Display name used when an item has no name
pub const UNNAMED_ITEM: &str = "Unnamed item";

/// Alt text used for item images when an item has no name
pub const ITEM_ALT_FALLBACK: &str = "Clothing item";

/// Fixed clothing taxonomy
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tops,
    Bottoms,
    Outerwear,
    Shoes,
    Accessories,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 5] = [
        Category::Tops,
        Category::Bottoms,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];

    /// Stable id used on the wire (e.g., "tops")
    pub fn id(self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
        }
    }

    /// Human readable name (e.g., "Tops")
    pub fn name(self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Outerwear => "Outerwear",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
        }
    }

    /// Display name for a raw category id, "Unknown" if unrecognised
    pub fn display_name_for(id: &str) -> &'static str {
        id.parse::<Category>().map(Category::name).unwrap_or("Unknown")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not one of the fixed category ids
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A single garment in the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    /// Unique id within the catalog
    pub id: ItemId,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Category this garment belongs to
    pub category: Category,
    /// Opaque image locator (URL or path)
    pub image_url: String,
}

impl ClothingItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: Option<&str>,
        category: Category,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.map(str::to_string),
            category,
            image_url: image_url.into(),
        }
    }

    /// Name shown to the user
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_ITEM)
    }

    /// Alt text for the item image
    pub fn alt_text(&self) -> &str {
        self.name.as_deref().unwrap_or(ITEM_ALT_FALLBACK)
    }
}

/// A composition of catalog items, referenced by id
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Outfit {
    /// Unique id within the outfit store
    pub id: OutfitId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered item references; may point at items that no longer exist
    pub items: Vec<ItemId>,
    /// Creation timestamp
    pub created: DateTime<Utc>,
}

impl Outfit {
    /// Title shown on the outfit card
    pub fn title(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Outfit {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ids_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.id().parse::<Category>(), Ok(category));
        }
        assert_eq!(
            "hats".parse::<Category>(),
            Err(UnknownCategory("hats".to_string()))
        );
    }

    #[test]
    fn test_unknown_category_error_message() {
        let err = "Shoes".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: Shoes");
    }

    #[test]
    fn test_unknown_category_display_name() {
        assert_eq!(Category::display_name_for("shoes"), "Shoes");
        assert_eq!(Category::display_name_for("hats"), "Unknown");
    }

    #[test]
    fn test_item_name_fallbacks() {
        let named = ClothingItem::new("item-1", Some("Blue T-Shirt"), Category::Tops, "a.png");
        assert_eq!(named.display_name(), "Blue T-Shirt");
        assert_eq!(named.alt_text(), "Blue T-Shirt");

        let unnamed = ClothingItem::new("item-2", None, Category::Shoes, "b.png");
        assert_eq!(unnamed.display_name(), "Unnamed item");
        assert_eq!(unnamed.alt_text(), "Clothing item");
    }

    #[test]
    fn test_item_deserializes_host_payload() {
        let json = r#"{"id":"item-7","category":"outerwear","imageUrl":"https://x/coat.png"}"#;
        let item: ClothingItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "item-7");
        assert_eq!(item.name, None);
        assert_eq!(item.category, Category::Outerwear);
        assert_eq!(item.image_url, "https://x/coat.png");
    }

    #[test]
    fn test_outfit_title_falls_back_to_id() {
        let outfit = Outfit {
            id: "outfit-42".to_string(),
            name: None,
            description: None,
            items: vec![],
            created: Utc::now(),
        };
        assert_eq!(outfit.title(), "Outfit outfit-42");
    }
}
