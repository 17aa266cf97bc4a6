/// Bundled demo wardrobe, loaded at startup when `load_sample_data` is set.

use super::data::{ClothingItem, Outfit};
use crate::error::Result;
use serde::Deserialize;

const SAMPLE_JSON: &str = include_str!("../../assets/sample_wardrobe.json");

#[derive(Deserialize, Debug, Clone)]
pub struct SampleWardrobe {
    pub items: Vec<ClothingItem>,
    pub outfits: Vec<Outfit>,
}

impl SampleWardrobe {
    /// Parse the bundled sample data
    pub fn load() -> Result<Self> {
        Self::from_json(SAMPLE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Category;

    #[test]
    fn test_bundled_sample_parses() {
        let sample = SampleWardrobe::load().unwrap();
        assert_eq!(sample.items.len(), 5);
        assert_eq!(sample.outfits.len(), 1);

        // One item per category, in display order
        let categories: Vec<Category> = sample.items.iter().map(|i| i.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());

        let outfit = &sample.outfits[0];
        assert_eq!(outfit.name.as_deref(), Some("Casual Day Out"));
        assert_eq!(outfit.items, vec!["item-1", "item-2", "item-4"]);
    }

    #[test]
    fn test_malformed_sample_is_an_error() {
        assert!(SampleWardrobe::from_json("{\"items\": 3}").is_err());
    }
}
