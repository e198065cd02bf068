//! # Collection Store
//!
//! Per-user "my garden" entries and favorites, reconciled with the static
//! catalog and persisted in the local key/value medium.
//!
//! ## Persistence
//!
//! Both collections are always read and written whole, under
//! `userPlants_<uid>` and `favoritePlants_<uid>`. Mutations are write-through:
//! the updated collection is serialized and written first, and the in-memory
//! cache only changes once the medium accepted the write. A rejected write
//! (quota exceeded) comes back as [`CollectionError::Storage`] with the previous
//! state intact.
//!
//! Two tabs on the same browser profile share the medium without isolation;
//! the last whole-collection write wins.

mod error;
pub mod ids;
pub mod schema;

use std::rc::Rc;

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info};

pub use error::CollectionError;

use crate::catalog::Catalog;
use crate::collection::ids::IdGenerator;
use crate::model::favorite::{FavoriteReference, StoredFavorite};
use crate::model::owned::OwnedPlantRecord;
use crate::model::plant::PlantRecord;
use crate::storage::{KeyValueStore, StorageError, keys};

/// Both collections of one user, as read from storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserCollections {
    pub owned: Vec<OwnedPlantRecord>,
    pub favorites: Vec<FavoriteReference>,
}

impl UserCollections {
    /// Reads both collections for `user_id`. Missing or malformed data is empty.
    pub fn read<S: KeyValueStore + ?Sized>(storage: &S, user_id: &str) -> Self {
        let owned_key = keys::user_plants(user_id);
        let favorites_key = keys::favorite_plants(user_id);

        let owned = schema::decode(&owned_key, storage.get(&owned_key).as_deref());
        let favorites = schema::decode::<StoredFavorite>(
            &favorites_key,
            storage.get(&favorites_key).as_deref(),
        )
        .into_iter()
        .map(FavoriteReference::from)
        .collect();

        Self { owned, favorites }
    }
}

/// Sizes shown in the dashboard quick stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionCounts {
    pub owned: usize,
    /// Favorites that still resolve to a catalog plant.
    pub favorites: usize,
}

pub struct CollectionStore<S> {
    storage: S,
    catalog: Rc<Catalog>,
    user_id: Option<String>,
    collections: UserCollections,
    ids: IdGenerator,
    clock: fn() -> DateTime<Utc>,
}

impl<S: KeyValueStore> CollectionStore<S> {
    pub fn new(storage: S, catalog: Rc<Catalog>) -> Self {
        Self {
            storage,
            catalog,
            user_id: None,
            collections: UserCollections::default(),
            ids: IdGenerator::default(),
            clock: Utc::now,
        }
    }

    /// Replaces the time source used for ids and default planting dates.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn current_user(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Makes `user_id` the current user and caches their collections.
    pub fn load_for_user(&mut self, user_id: &str) -> &UserCollections {
        self.collections = UserCollections::read(&self.storage, user_id);
        self.user_id = Some(user_id.to_string());
        info!(
            "Loaded collections for {}: {} owned, {} favorites",
            user_id,
            self.collections.owned.len(),
            self.collections.favorites.len()
        );
        &self.collections
    }

    /// Forgets the current user (sign-out). Stored data is left in place.
    pub fn clear(&mut self) {
        self.user_id = None;
        self.collections = UserCollections::default();
    }

    pub fn owned(&self) -> &[OwnedPlantRecord] {
        &self.collections.owned
    }

    pub fn favorites(&self) -> &[FavoriteReference] {
        &self.collections.favorites
    }

    /// Favorites resolved against the live catalog; references to plants that
    /// no longer exist are skipped.
    pub fn favorite_plants(&self) -> Vec<&PlantRecord> {
        self.collections
            .favorites
            .iter()
            .filter_map(|fav| self.catalog.get(&fav.plant_id))
            .collect()
    }

    pub fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            owned: self.collections.owned.len(),
            favorites: self
                .collections
                .favorites
                .iter()
                .filter(|fav| self.catalog.contains(&fav.plant_id))
                .count(),
        }
    }

    pub fn is_owned(&self, catalog_id: &str) -> bool {
        self.collections
            .owned
            .iter()
            .any(|p| p.original_id == catalog_id)
    }

    pub fn is_favorite(&self, catalog_id: &str) -> bool {
        self.collections
            .favorites
            .iter()
            .any(|f| f.plant_id == catalog_id)
    }

    pub fn add_owned(
        &mut self,
        catalog_id: &str,
        nickname: Option<&str>,
        date_planted: Option<NaiveDate>,
    ) -> Result<OwnedPlantRecord, CollectionError> {
        let user_id = self.require_user()?.to_string();
        let plant = self
            .catalog
            .get(catalog_id)
            .ok_or_else(|| CollectionError::UnknownPlant(catalog_id.to_string()))?;

        let now = (self.clock)();
        let owned = &self.collections.owned;
        let id = self.ids.next_id(catalog_id, now.timestamp_millis(), |candidate| {
            owned.iter().any(|p| p.id == candidate)
        });
        let record = OwnedPlantRecord::from_catalog(
            id,
            plant,
            nickname,
            date_planted.unwrap_or_else(|| now.date_naive()),
        );

        let mut updated = self.collections.owned.clone();
        updated.push(record.clone());
        self.write(&keys::user_plants(&user_id), &updated)?;
        self.collections.owned = updated;

        debug!("Added {} ({}) for {}", record.id, catalog_id, user_id);
        Ok(record)
    }

    /// Removes a garden entry by its synthetic id. Unknown ids are a no-op and
    /// do not touch storage.
    pub fn remove_owned(&mut self, owned_id: &str) -> Result<bool, CollectionError> {
        let user_id = self.require_user()?.to_string();
        if !self.collections.owned.iter().any(|p| p.id == owned_id) {
            return Ok(false);
        }

        let updated: Vec<OwnedPlantRecord> = self
            .collections
            .owned
            .iter()
            .filter(|p| p.id != owned_id)
            .cloned()
            .collect();
        self.write(&keys::user_plants(&user_id), &updated)?;
        self.collections.owned = updated;

        debug!("Removed {} for {}", owned_id, user_id);
        Ok(true)
    }

    /// Flips favorite membership of `catalog_id`, returning the new membership.
    pub fn toggle_favorite(&mut self, catalog_id: &str) -> Result<bool, CollectionError> {
        let user_id = self.require_user()?.to_string();
        let was_favorite = self.is_favorite(catalog_id);

        let updated: Vec<FavoriteReference> = if was_favorite {
            self.collections
                .favorites
                .iter()
                .filter(|f| f.plant_id != catalog_id)
                .cloned()
                .collect()
        } else {
            if !self.catalog.contains(catalog_id) {
                return Err(CollectionError::UnknownPlant(catalog_id.to_string()));
            }
            let mut favorites = self.collections.favorites.clone();
            favorites.push(FavoriteReference::new(catalog_id));
            favorites
        };

        self.write(&keys::favorite_plants(&user_id), &updated)?;
        self.collections.favorites = updated;
        Ok(!was_favorite)
    }

    pub fn save_profile_photo(&self, user_id: &str, data_url: &str) -> Result<(), StorageError> {
        self.storage.set(&keys::profile_photo(user_id), data_url)
    }

    pub fn remove_profile_photo(&self, user_id: &str) -> Result<(), StorageError> {
        self.storage.remove(&keys::profile_photo(user_id))
    }

    pub fn load_profile_photo(&self, user_id: &str) -> Option<String> {
        self.storage
            .get(&keys::profile_photo(user_id))
            .filter(|photo| !photo.is_empty())
    }

    fn require_user(&self) -> Result<&str, CollectionError> {
        self.user_id.as_deref().ok_or(CollectionError::NoActiveUser)
    }

    fn write<T: serde::Serialize>(&self, key: &str, items: &[T]) -> Result<(), CollectionError> {
        let encoded = schema::encode(items)?;
        self.storage.set(key, &encoded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::plant;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap()
    }

    fn catalog() -> Rc<Catalog> {
        Rc::new(
            Catalog::new(vec![
                plant("pothos", "Pothos", &["Easy"]),
                plant("fern", "Boston Fern", &["Humidity"]),
            ])
            .unwrap(),
        )
    }

    fn store_for(storage: Rc<MemoryStore>) -> CollectionStore<Rc<MemoryStore>> {
        let mut store = CollectionStore::new(storage, catalog()).with_clock(fixed_clock);
        store.load_for_user("user-1");
        store
    }

    #[test]
    fn load_for_unknown_user_is_empty() {
        let mut store = CollectionStore::new(MemoryStore::new(), catalog());
        let collections = store.load_for_user("nobody");
        assert!(collections.owned.is_empty());
        assert!(collections.favorites.is_empty());
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn malformed_stored_data_loads_as_empty() {
        let storage = MemoryStore::new();
        storage.set("userPlants_user-1", "{broken").unwrap();
        storage.set("favoritePlants_user-1", "42").unwrap();
        let collections = UserCollections::read(&storage, "user-1");
        assert_eq!(collections, UserCollections::default());
    }

    #[test]
    fn one_damaged_entry_does_not_cost_the_rest_of_the_garden() {
        let storage = Rc::new(MemoryStore::new());
        let mut store = store_for(storage.clone());
        store.add_owned("pothos", None, None).unwrap();
        store.add_owned("pothos", None, None).unwrap();

        let raw = storage.get("userPlants_user-1").unwrap();
        let damaged = raw.replacen(r#""datePlanted":"2025-05-01""#, r#""datePlanted":"someday""#, 1);
        assert_ne!(raw, damaged);
        storage.set("userPlants_user-1", &damaged).unwrap();

        let mut store = store_for(storage.clone());
        assert_eq!(store.owned().len(), 1);
        store.add_owned("fern", None, None).unwrap();
        assert_eq!(UserCollections::read(&*storage, "user-1").owned.len(), 2);
    }

    #[test]
    fn added_plant_is_visible_after_reload_with_default_nickname() {
        let storage = Rc::new(MemoryStore::new());
        let mut store = store_for(storage.clone());
        let added = store.add_owned("fern", None, None).unwrap();
        assert_eq!(added.nickname, "Boston Fern");
        assert_eq!(added.date_planted, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());

        let reloaded = UserCollections::read(&*storage, "user-1");
        assert_eq!(reloaded.owned.len(), 1);
        assert_eq!(reloaded.owned[0].original_id, "fern");
        assert_eq!(reloaded.owned[0].nickname, "Boston Fern");
        assert!(reloaded.owned[0].care_history.is_empty());
        assert!(reloaded.owned[0].notes.is_empty());
    }

    #[test]
    fn custom_nickname_and_date_are_kept() {
        let mut store = store_for(Rc::new(MemoryStore::new()));
        let date = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
        let added = store.add_owned("pothos", Some("Goldie"), Some(date)).unwrap();
        assert_eq!(added.nickname, "Goldie");
        assert_eq!(added.date_planted, date);
        assert!(added.has_custom_nickname());
        assert!(store.is_owned("pothos"));
        assert!(!store.is_owned("fern"));
    }

    #[test]
    fn sequential_adds_in_the_same_tick_get_distinct_ids() {
        let mut store = store_for(Rc::new(MemoryStore::new()));
        let first = store.add_owned("pothos", None, None).unwrap();
        let second = store.add_owned("pothos", None, None).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.owned().len(), 2);
    }

    #[test]
    fn ids_do_not_collide_with_entries_from_an_earlier_session() {
        let storage = Rc::new(MemoryStore::new());
        let first = store_for(storage.clone()).add_owned("pothos", None, None).unwrap();
        let second = store_for(storage.clone()).add_owned("pothos", None, None).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(UserCollections::read(&*storage, "user-1").owned.len(), 2);
    }

    #[test]
    fn adding_an_unknown_plant_is_an_error() {
        let mut store = store_for(Rc::new(MemoryStore::new()));
        let result = store.add_owned("triffid", None, None);
        assert!(matches!(result, Err(CollectionError::UnknownPlant(id)) if id == "triffid"));
        assert!(store.owned().is_empty());
    }

    #[test]
    fn mutations_require_a_user() {
        let mut store = CollectionStore::new(MemoryStore::new(), catalog());
        assert!(matches!(
            store.add_owned("pothos", None, None),
            Err(CollectionError::NoActiveUser)
        ));
        assert!(matches!(
            store.toggle_favorite("pothos"),
            Err(CollectionError::NoActiveUser)
        ));
    }

    #[test]
    fn removing_an_unknown_id_leaves_storage_untouched() {
        let storage = Rc::new(MemoryStore::new());
        let mut store = store_for(storage.clone());
        store.add_owned("pothos", None, None).unwrap();
        let before = storage.get("userPlants_user-1");
        let writes = storage.write_count();

        assert!(!store.remove_owned("pothos_0").unwrap());

        assert_eq!(storage.get("userPlants_user-1"), before);
        assert_eq!(storage.write_count(), writes);
        assert_eq!(store.owned().len(), 1);
    }

    #[test]
    fn remove_owned_persists() {
        let storage = Rc::new(MemoryStore::new());
        let mut store = store_for(storage.clone());
        let added = store.add_owned("pothos", None, None).unwrap();
        assert!(store.remove_owned(&added.id).unwrap());
        assert!(store.owned().is_empty());
        assert!(UserCollections::read(&*storage, "user-1").owned.is_empty());
    }

    #[test]
    fn toggling_twice_restores_membership() {
        let storage = Rc::new(MemoryStore::new());
        let mut store = store_for(storage.clone());
        store.toggle_favorite("fern").unwrap();
        let original = store.favorites().to_vec();

        for id in ["pothos", "fern"] {
            let first = store.toggle_favorite(id).unwrap();
            let second = store.toggle_favorite(id).unwrap();
            assert_ne!(first, second);
            assert_eq!(store.favorites(), original.as_slice());
        }
        assert_eq!(UserCollections::read(&*storage, "user-1").favorites, original);
    }

    #[test]
    fn favorites_resolve_against_the_catalog() {
        let storage = Rc::new(MemoryStore::new());
        storage
            .set(
                "favoritePlants_user-1",
                r#"{"version":1,"items":[{"plantId":"fern"},{"plantId":"gone"}]}"#,
            )
            .unwrap();
        let store = store_for(storage);
        assert!(store.is_favorite("gone"));
        let names: Vec<_> = store.favorite_plants().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Boston Fern"]);
        assert_eq!(
            store.counts(),
            CollectionCounts {
                owned: 0,
                favorites: 1
            }
        );
    }

    #[test]
    fn favoriting_an_unknown_plant_is_an_error_but_unfavoriting_is_not() {
        let storage = Rc::new(MemoryStore::new());
        storage
            .set("favoritePlants_user-1", r#"[{"id":"gone","name":"Old entry"}]"#)
            .unwrap();
        let mut store = store_for(storage);
        assert!(matches!(
            store.toggle_favorite("triffid"),
            Err(CollectionError::UnknownPlant(_))
        ));
        assert!(!store.toggle_favorite("gone").unwrap());
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn legacy_snapshots_decode() {
        let storage = MemoryStore::new();
        let legacy_owned = r#"[{
            "id": "pothos_1700000000000",
            "originalId": "pothos",
            "nickname": "Goldie",
            "datePlanted": "2024-01-02",
            "careHistory": [],
            "notes": "",
            "name": "Pothos",
            "scientificName": "Epipremnum aureum",
            "tagline": "The Forgiving Trailblazer",
            "category": ["Easy Care"],
            "description": "Trailing vine",
            "image": "/images/pothos.jpg",
            "heroImage": "/images/pothos-hero.jpg",
            "care": {"sunlight": "Low", "water": "Weekly", "soil": "Any", "humidity": "Any"},
            "benefits": ["Easy"],
            "proTip": "Pinch it",
            "mindfulnessPrompt": "Grow"
        }]"#;
        storage.set("userPlants_user-1", legacy_owned).unwrap();
        storage
            .set("favoritePlants_user-1", r#"[{"id":"pothos","name":"Pothos"}]"#)
            .unwrap();

        let collections = UserCollections::read(&storage, "user-1");
        assert_eq!(collections.owned[0].nickname, "Goldie");
        assert_eq!(collections.owned[0].info.name, "Pothos");
        assert_eq!(collections.favorites, vec![FavoriteReference::new("pothos")]);
    }

    #[test]
    fn rejected_writes_leave_state_unchanged() {
        let storage = Rc::new(MemoryStore::with_capacity(64));
        let mut store = store_for(storage.clone());

        let result = store.add_owned("pothos", None, None);
        assert!(matches!(
            result,
            Err(CollectionError::Storage(StorageError::QuotaExceeded { .. }))
        ));
        assert!(store.owned().is_empty());
        assert!(!store.is_owned("pothos"));
        assert_eq!(storage.get("userPlants_user-1"), None);
    }

    #[test]
    fn profile_photo_is_user_scoped() {
        let storage = Rc::new(MemoryStore::new());
        let store = store_for(storage.clone());
        store.save_profile_photo("user-1", "data:image/png;base64,AAA").unwrap();
        assert_eq!(
            storage.get("profilePhoto_user-1").as_deref(),
            Some("data:image/png;base64,AAA")
        );
        assert_eq!(store.load_profile_photo("user-2"), None);
        store.remove_profile_photo("user-1").unwrap();
        assert_eq!(store.load_profile_photo("user-1"), None);
    }

    #[test]
    fn clear_forgets_the_user_but_keeps_storage() {
        let storage = Rc::new(MemoryStore::new());
        let mut store = store_for(storage.clone());
        store.add_owned("pothos", None, None).unwrap();
        store.clear();
        assert_eq!(store.current_user(), None);
        assert!(store.owned().is_empty());
        assert_eq!(UserCollections::read(&*storage, "user-1").owned.len(), 1);
    }
}
