use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by collection mutations. Reads never fail.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// Mutations need a signed-in user to scope the storage keys.
    #[error("No signed-in user")]
    NoActiveUser,

    /// The catalog id does not exist in the built-in catalog.
    #[error("Unknown plant: {0}")]
    UnknownPlant(String),

    /// The persistence medium rejected the write; in-memory state is unchanged.
    #[error("Could not save your collection: {0}")]
    Storage(#[from] StorageError),

    #[error("Could not encode collection: {0}")]
    Encode(#[from] serde_json::Error),
}
