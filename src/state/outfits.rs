use std::num::NonZeroUsize;

use super::data::Outfit;
use crate::error::{EntityKind, Result, WardrobeError};
use tracing::info;

/// The Outfit Store owns generated and saved outfits.
///
/// Outfits are kept most-recent first: new outfits are prepended.
/// Items are referenced by id only and are never owned here.
/// An optional capacity limit evicts the oldest outfits after a prepend;
/// without one the store grows without bound. The limit is never zero,
/// so the outfit just added always survives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutfitStore {
    outfits: Vec<Outfit>,
    capacity_limit: Option<NonZeroUsize>,
}

impl OutfitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that keeps at most `limit` outfits (None = unbounded)
    pub fn with_capacity_limit(limit: Option<NonZeroUsize>) -> Self {
        Self {
            outfits: Vec::new(),
            capacity_limit: limit,
        }
    }

    /// Bulk initial load, keeping the given order (most recent first).
    pub fn from_outfits(
        outfits: impl IntoIterator<Item = Outfit>,
        limit: Option<NonZeroUsize>,
    ) -> Result<Self> {
        let mut store = Self::with_capacity_limit(limit);
        for outfit in outfits {
            if store.get(&outfit.id).is_some() {
                return Err(WardrobeError::duplicate(EntityKind::Outfit, outfit.id));
            }
            store.outfits.push(outfit);
        }
        store.enforce_limit();
        Ok(store)
    }

    /// All outfits, most recently created first
    pub fn list(&self) -> &[Outfit] {
        &self.outfits
    }

    /// Prepend a new outfit
    pub fn add(&mut self, outfit: Outfit) -> Result<()> {
        if self.get(&outfit.id).is_some() {
            return Err(WardrobeError::duplicate(EntityKind::Outfit, outfit.id));
        }
        self.outfits.insert(0, outfit);
        self.enforce_limit();
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Outfit> {
        self.outfits.iter().find(|outfit| outfit.id == id)
    }

    pub fn capacity_limit(&self) -> Option<NonZeroUsize> {
        self.capacity_limit
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.capacity_limit.map(NonZeroUsize::get) else {
            return;
        };
        if self.outfits.len() > limit {
            let evicted = self.outfits.len() - limit;
            self.outfits.truncate(limit);
            info!(evicted, limit, "evicted oldest outfits");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn outfit(id: &str) -> Outfit {
        Outfit {
            id: id.to_string(),
            name: None,
            description: None,
            items: vec![],
            created: Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap(),
        }
    }

    fn limit(n: usize) -> Option<NonZeroUsize> {
        NonZeroUsize::new(n)
    }

    fn ids(store: &OutfitStore) -> Vec<&str> {
        store.list().iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_add_prepends() {
        let mut store = OutfitStore::new();
        store.add(outfit("first")).unwrap();
        store.add(outfit("second")).unwrap();
        store.add(outfit("third")).unwrap();
        assert_eq!(ids(&store), vec!["third", "second", "first"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = OutfitStore::new();
        store.add(outfit("o1")).unwrap();
        let err = store.add(outfit("o1")).unwrap_err();
        assert!(matches!(
            err,
            WardrobeError::DuplicateId { kind: EntityKind::Outfit, .. }
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_absent() {
        let store = OutfitStore::new();
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut store = OutfitStore::new();
        for i in 0..100 {
            store.add(outfit(&format!("o{i}"))).unwrap();
        }
        assert_eq!(store.len(), 100);
        assert_eq!(store.capacity_limit(), None);
    }

    #[test]
    fn test_capacity_limit_evicts_oldest() {
        let mut store = OutfitStore::with_capacity_limit(limit(2));
        store.add(outfit("a")).unwrap();
        store.add(outfit("b")).unwrap();
        store.add(outfit("c")).unwrap();
        assert_eq!(ids(&store), vec!["c", "b"]);
        assert!(store.get("a").is_none());
    }

    #[test]
    fn test_smallest_limit_keeps_newest() {
        let mut store = OutfitStore::with_capacity_limit(limit(1));
        store.add(outfit("a")).unwrap();
        store.add(outfit("b")).unwrap();
        assert_eq!(ids(&store), vec!["b"]);
        assert_eq!(store.list()[0].id, "b");
    }

    #[test]
    fn test_from_outfits_keeps_order_and_limit() {
        let store = OutfitStore::from_outfits([outfit("new"), outfit("mid"), outfit("old")], limit(2)).unwrap();
        assert_eq!(ids(&store), vec!["new", "mid"]);

        assert!(OutfitStore::from_outfits([outfit("x"), outfit("x")], None).is_err());
    }
}
