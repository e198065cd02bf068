use serde::{Deserialize, Serialize};

/// Marks a catalog plant as a favorite. Resolved against the live catalog when
/// rendered, so catalog corrections show up in existing favorites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteReference {
    pub plant_id: String,
}

impl FavoriteReference {
    pub fn new(plant_id: impl Into<String>) -> Self {
        Self {
            plant_id: plant_id.into(),
        }
    }
}

/// Shape of a stored favorite entry.
///
/// Older data stored a full copy of the plant record; only its `id` matters now.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredFavorite {
    Reference(FavoriteReference),
    Snapshot { id: String },
}

impl From<StoredFavorite> for FavoriteReference {
    fn from(stored: StoredFavorite) -> Self {
        match stored {
            StoredFavorite::Reference(reference) => reference,
            StoredFavorite::Snapshot { id } => FavoriteReference::new(id),
        }
    }
}
