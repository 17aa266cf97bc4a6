/// Error types for the wardrobe core
///
/// Most "errors" in this domain are modeled as no-ops (stale ids, events
/// arriving after navigation). Only id collisions and startup failures
/// surface as `WardrobeError`.

use std::fmt;
use thiserror::Error;

/// Result type alias for wardrobe operations
pub type Result<T> = std::result::Result<T, WardrobeError>;

/// Which store rejected a duplicate id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    ClothingItem,
    Outfit,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::ClothingItem => write!(f, "clothing item"),
            EntityKind::Outfit => write!(f, "outfit"),
        }
    }
}

#[derive(Error, Debug)]
pub enum WardrobeError {
    /// An id was inserted twice; this signals an id-generation bug upstream
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: EntityKind, id: String },

    /// Failed to read the config file
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for `Config`
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// No config directory could be determined for this platform
    #[error("could not determine config directory")]
    NoConfigDir,

    /// The bundled sample wardrobe failed to parse
    #[error("invalid sample data: {0}")]
    SampleData(#[from] serde_json::Error),
}

impl WardrobeError {
    pub fn duplicate(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::DuplicateId { kind, id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_kind_and_id() {
        let err = WardrobeError::duplicate(EntityKind::Outfit, "outfit-1");
        assert_eq!(err.to_string(), "duplicate outfit id: outfit-1");

        let err = WardrobeError::duplicate(EntityKind::ClothingItem, "item-9");
        assert_eq!(err.to_string(), "duplicate clothing item id: item-9");
    }
}
