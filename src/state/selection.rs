/// Selection policy: randomized but reproducible picks over the catalog.
///
/// Randomness is always injected through `RandomSource` so tests can pin
/// outcomes and the render pipeline can replay a draw from a stored seed.

use super::catalog::Catalog;
use super::data::{Category, ItemId};

/// Categories used when generating an outfit (accessories are left out)
pub const OUTFIT_CATEGORIES: [Category; 4] = [
    Category::Tops,
    Category::Bottoms,
    Category::Outerwear,
    Category::Shoes,
];

/// Source of randomness for selection
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let len = len as u64;
        // Rejection sampling keeps the pick unbiased
        let zone = u64::MAX - (u64::MAX % len);
        loop {
            let value = self.next_u64();
            if value < zone {
                return (value % len) as usize;
            }
        }
    }
}

/// SplitMix64 generator seeded with a fixed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from the wall clock
    pub fn from_clock() -> Self {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        Self::new(nanos as u64)
    }

    /// A fixed seed when configured, otherwise the wall clock
    pub fn from_seed_or_clock(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_clock(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

/// For each category in order, pick one item uniformly at random.
/// Categories with no items are skipped, so the result may be shorter
/// than `categories`.
pub fn random_one_from_each_category(
    categories: &[Category],
    catalog: &Catalog,
    rng: &mut dyn RandomSource,
) -> Vec<ItemId> {
    categories
        .iter()
        .filter_map(|&category| {
            let candidates = catalog.filter_by_category(category);
            if candidates.is_empty() {
                return None;
            }
            let index = rng.pick_index(candidates.len());
            Some(candidates[index].id.clone())
        })
        .collect()
}
