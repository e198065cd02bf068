//! # Plant Catalog
//!
//! The catalog is the ordered, read-only list of plant species shown across the
//! site. It is compiled into the binary from `data/plants.json`, parsed once at
//! startup and shared by reference between every view.
//!
//! Loading validates the two invariants the rest of the code relies on: ids are
//! unique and every plant belongs to at least one category.

pub mod query;

use std::collections::HashSet;

use thiserror::Error;

use crate::model::plant::PlantRecord;

const BUILTIN_CATALOG: &str = include_str!("../../data/plants.json");

/// Sentinel category meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate plant id in catalog: {0}")]
    DuplicateId(String),

    #[error("Plant {0} has no category")]
    EmptyCategory(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    plants: Vec<PlantRecord>,
}

impl Catalog {
    /// The catalog shipped with the site.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let plants: Vec<PlantRecord> = serde_json::from_str(json)?;
        Self::new(plants)
    }

    pub fn new(plants: Vec<PlantRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(plants.len());
        for plant in &plants {
            if !seen.insert(plant.id.as_str()) {
                return Err(CatalogError::DuplicateId(plant.id.clone()));
            }
            if plant.info.category.is_empty() {
                return Err(CatalogError::EmptyCategory(plant.id.clone()));
            }
        }
        Ok(Self { plants })
    }

    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PlantRecord> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// `"All"` followed by every distinct category, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut categories = vec![ALL_CATEGORIES];
        for category in self.plants.iter().flat_map(|p| p.info.category.iter()) {
            if seen.insert(category.as_str()) {
                categories.push(category.as_str());
            }
        }
        categories
    }

    /// Other plants sharing at least one category with `plant`, catalog order.
    pub fn related<'a>(&'a self, plant: &PlantRecord, limit: usize) -> Vec<&'a PlantRecord> {
        self.plants
            .iter()
            .filter(|p| p.id != plant.id)
            .filter(|p| p.info.category.iter().any(|c| plant.has_category(c)))
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::plant::{CareAttributes, PlantInfo};

    pub(crate) fn plant(id: &str, name: &str, categories: &[&str]) -> PlantRecord {
        PlantRecord {
            id: id.to_string(),
            info: PlantInfo {
                name: name.to_string(),
                scientific_name: format!("{} scientificus", name),
                tagline: format!("The {} tagline", name),
                category: categories.iter().map(|c| c.to_string()).collect(),
                description: format!("{} description", name),
                image: format!("/images/{}.jpg", id),
                hero_image: String::new(),
                care: CareAttributes {
                    sunlight: "Bright".into(),
                    water: "Weekly".into(),
                    soil: "Loose".into(),
                    humidity: "Average".into(),
                },
                benefits: vec![],
                pro_tip: String::new(),
                mindfulness_prompt: String::new(),
            },
        }
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.contains("pothos"));
        let pothos = catalog.get("pothos").unwrap();
        assert_eq!(pothos.name(), "Pothos");
        assert_eq!(pothos.info.scientific_name, "Epipremnum aureum");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![plant("a", "A", &["X"]), plant("a", "B", &["Y"])]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn plants_without_category_are_rejected() {
        let result = Catalog::new(vec![plant("a", "A", &[])]);
        assert!(matches!(result, Err(CatalogError::EmptyCategory(_))));
    }

    #[test]
    fn categories_start_with_all_and_keep_first_seen_order() {
        let catalog = Catalog::new(vec![
            plant("a", "A", &["Easy", "Low Light"]),
            plant("b", "B", &["Humidity", "Easy"]),
        ])
        .unwrap();
        assert_eq!(catalog.categories(), vec!["All", "Easy", "Low Light", "Humidity"]);
    }

    #[test]
    fn related_plants_share_a_category_and_exclude_self() {
        let catalog = Catalog::new(vec![
            plant("a", "A", &["Easy"]),
            plant("b", "B", &["Easy"]),
            plant("c", "C", &["Humidity"]),
            plant("d", "D", &["Easy", "Humidity"]),
        ])
        .unwrap();
        let a = catalog.get("a").unwrap();
        let related: Vec<_> = catalog.related(a, 3).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(related, vec!["b", "d"]);
        assert_eq!(catalog.related(a, 1).len(), 1);
    }
}
