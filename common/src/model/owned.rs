use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::plant::{PlantInfo, PlantRecord};

/// One plant in a user's garden.
///
/// Carries a copy of the catalog species data plus the personal fields. The
/// JSON keeps the species fields flattened next to `id` / `originalId`, which
/// is how garden entries have always been stored in the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedPlantRecord {
    /// Synthetic id, unique per ownership event.
    pub id: String,
    /// Catalog id this instance was created from.
    pub original_id: String,
    pub nickname: String,
    pub date_planted: NaiveDate,
    #[serde(default)]
    pub care_history: Vec<CareEvent>,
    #[serde(default)]
    pub notes: String,
    #[serde(flatten)]
    pub info: PlantInfo,
}

/// A single logged care action (watering, repotting, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareEvent {
    pub date: NaiveDate,
    pub kind: String,
    #[serde(default)]
    pub note: String,
}

impl OwnedPlantRecord {
    /// Builds a fresh garden entry; a blank nickname falls back to the species name.
    pub fn from_catalog(
        id: String,
        plant: &PlantRecord,
        nickname: Option<&str>,
        date_planted: NaiveDate,
    ) -> Self {
        let nickname = nickname
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&plant.info.name)
            .to_string();

        Self {
            id,
            original_id: plant.id.clone(),
            nickname,
            date_planted,
            care_history: Vec::new(),
            notes: String::new(),
            info: plant.info.clone(),
        }
    }

    /// Whether the user picked a name different from the species name.
    pub fn has_custom_nickname(&self) -> bool {
        self.nickname != self.info.name
    }
}
