//! Directory search: free-text match on name, scientific name and tagline,
//! intersected with an optional category filter. Pure and recomputed on every
//! keystroke; the catalog is small enough that no index is needed.

use std::fmt;

use crate::catalog::{ALL_CATEGORIES, Catalog};
use crate::model::plant::PlantRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<'a> {
    All,
    Only(&'a str),
}

impl<'a> CategoryFilter<'a> {
    /// `"All"` (and the empty string) disable category filtering.
    pub fn parse(category: &'a str) -> Self {
        if category.is_empty() || category == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(category)
        }
    }

    fn accepts(self, plant: &PlantRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => plant.has_category(category),
        }
    }
}

/// Whether `plant` contains `needle` (already lower-cased) in a searchable field.
fn matches_search(plant: &PlantRecord, needle: &str) -> bool {
    needle.is_empty()
        || [
            &plant.info.name,
            &plant.info.scientific_name,
            &plant.info.tagline,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Plants matching both the search term and the category, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, search_term: &str, category: &str) -> Vec<&'a PlantRecord> {
    let needle = search_term.to_lowercase();
    let category = CategoryFilter::parse(category);
    catalog
        .plants()
        .iter()
        .filter(|plant| category.accepts(plant) && matches_search(plant, &needle))
        .collect()
}

/// The "Showing all 10 plants" / "Found 2 plants in Easy Care" line above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySummary<'a> {
    pub shown: usize,
    pub total: usize,
    pub category: CategoryFilter<'a>,
}

impl<'a> DirectorySummary<'a> {
    pub fn new(shown: usize, total: usize, category: &'a str) -> Self {
        Self {
            shown,
            total,
            category: CategoryFilter::parse(category),
        }
    }
}

impl fmt::Display for DirectorySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shown == self.total {
            write!(f, "Showing all {} plants", self.total)?;
        } else {
            let plural = if self.shown == 1 { "" } else { "s" };
            write!(f, "Found {} plant{}", self.shown, plural)?;
        }
        if let CategoryFilter::Only(category) = self.category {
            write!(f, " in {}", category)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::plant;

    fn scenario_catalog() -> Catalog {
        Catalog::new(vec![
            plant("pothos", "Pothos", &["Easy"]),
            plant("fern", "Boston Fern", &["Humidity"]),
        ])
        .unwrap()
    }

    fn ids(plants: Vec<&PlantRecord>) -> Vec<&str> {
        plants.into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn search_term_matches_name_case_insensitively() {
        let catalog = scenario_catalog();
        assert_eq!(ids(filter(&catalog, "pot", "All")), vec!["pothos"]);
        assert_eq!(ids(filter(&catalog, "POT", "All")), vec!["pothos"]);
    }

    #[test]
    fn empty_search_with_category_selects_that_category() {
        let catalog = scenario_catalog();
        assert_eq!(ids(filter(&catalog, "", "Humidity")), vec!["fern"]);
    }

    #[test]
    fn empty_search_and_all_returns_everything_in_order() {
        let catalog = scenario_catalog();
        assert_eq!(ids(filter(&catalog, "", "All")), vec!["pothos", "fern"]);
    }

    #[test]
    fn search_covers_scientific_name_and_tagline() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(ids(filter(&catalog, "epipremnum", "All")), vec!["pothos"]);
        assert_eq!(ids(filter(&catalog, "prayer dancer", "All")), vec!["calathea"]);
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let catalog = scenario_catalog();
        assert!(filter(&catalog, "", "Cactus").is_empty());
    }

    #[test]
    fn filter_is_sound_and_complete_over_the_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let terms = ["", "a", "PLANT", "the", "ficus", "zz", "nothing-matches"];
        for category in catalog.categories() {
            for term in terms {
                let result = filter(&catalog, term, category);
                let needle = term.to_lowercase();
                let expected: Vec<&PlantRecord> = catalog
                    .plants()
                    .iter()
                    .filter(|p| {
                        let text_ok = p.info.name.to_lowercase().contains(&needle)
                            || p.info.scientific_name.to_lowercase().contains(&needle)
                            || p.info.tagline.to_lowercase().contains(&needle);
                        let category_ok = category == "All" || p.info.category.iter().any(|c| c == category);
                        text_ok && category_ok
                    })
                    .collect();
                assert_eq!(result, expected, "term {:?} category {:?}", term, category);
            }
        }
    }

    #[test]
    fn summary_text() {
        assert_eq!(DirectorySummary::new(10, 10, "All").to_string(), "Showing all 10 plants");
        assert_eq!(DirectorySummary::new(1, 10, "All").to_string(), "Found 1 plant");
        assert_eq!(
            DirectorySummary::new(3, 10, "Easy Care").to_string(),
            "Found 3 plants in Easy Care"
        );
    }
}
