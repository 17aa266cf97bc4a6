use super::data::{Category, ClothingItem};
use crate::error::{EntityKind, Result, WardrobeError};

/// The Catalog owns every clothing item in the wardrobe.
/// Items are kept in insertion order; ids are unique at all times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<ClothingItem>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk initial load. Fails on the first duplicate id.
    pub fn from_items(items: impl IntoIterator<Item = ClothingItem>) -> Result<Self> {
        let mut catalog = Self::new();
        for item in items {
            catalog.add(item)?;
        }
        Ok(catalog)
    }

    /// All items in insertion order
    pub fn list(&self) -> &[ClothingItem] {
        &self.items
    }

    /// Items of one category, preserving catalog order
    pub fn filter_by_category(&self, category: Category) -> Vec<&ClothingItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Insert a new item
    pub fn add(&mut self, item: ClothingItem) -> Result<()> {
        if self.get(&item.id).is_some() {
            return Err(WardrobeError::duplicate(EntityKind::ClothingItem, item.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// Delete an item by id.
    /// Absent ids are ignored: deletion may race with a stale UI reference.
    pub fn remove(&mut self, id: &str) -> Option<ClothingItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: Category) -> ClothingItem {
        ClothingItem::new(id, Some(id), category, format!("https://img/{id}.png"))
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = Catalog::new();
        catalog.add(item("a", Category::Tops)).unwrap();

        let err = catalog.add(item("a", Category::Shoes)).unwrap_err();
        assert!(matches!(
            err,
            WardrobeError::DuplicateId { kind: EntityKind::ClothingItem, ref id } if id == "a"
        ));
        // The original item is untouched
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().category, Category::Tops);
    }

    #[test]
    fn test_remove_then_get_is_absent() {
        let mut catalog = Catalog::from_items([item("a", Category::Tops), item("b", Category::Bottoms)]).unwrap();

        let removed = catalog.remove("a");
        assert_eq!(removed.map(|i| i.id), Some("a".to_string()));
        assert!(catalog.get("a").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut catalog = Catalog::from_items([item("a", Category::Tops)]).unwrap();
        assert!(catalog.remove("missing").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_ids_stay_unique_across_add_remove_sequences() {
        let mut catalog = Catalog::new();
        let ops: [(&str, bool); 8] = [
            ("a", true),
            ("b", true),
            ("a", true),
            ("a", false),
            ("a", true),
            ("c", true),
            ("b", false),
            ("b", true),
        ];
        for (id, is_add) in ops {
            if is_add {
                let _ = catalog.add(item(id, Category::Tops));
            } else {
                catalog.remove(id);
                assert!(catalog.get(id).is_none());
            }
            let mut ids: Vec<&str> = catalog.list().iter().map(|i| i.id.as_str()).collect();
            let total = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), total);
        }
        let ids: Vec<&str> = catalog.list().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_filter_by_category_is_ordered_subsequence() {
        let catalog = Catalog::from_items([
            item("t1", Category::Tops),
            item("s1", Category::Shoes),
            item("t2", Category::Tops),
            item("b1", Category::Bottoms),
            item("t3", Category::Tops),
        ])
        .unwrap();

        let tops: Vec<&str> = catalog
            .filter_by_category(Category::Tops)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(tops, vec!["t1", "t2", "t3"]);

        let expected: Vec<&ClothingItem> = catalog
            .list()
            .iter()
            .filter(|i| i.category == Category::Shoes)
            .collect();
        assert_eq!(catalog.filter_by_category(Category::Shoes), expected);
        assert!(catalog.filter_by_category(Category::Accessories).is_empty());
    }

    #[test]
    fn test_bulk_load_rejects_duplicates() {
        let result = Catalog::from_items([item("x", Category::Tops), item("x", Category::Tops)]);
        assert!(result.is_err());
    }
}
