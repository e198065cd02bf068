use serde::{Deserialize, Serialize};

/// A species entry of the built-in plant catalog.
///
/// Records are loaded once from the embedded catalog file and never mutated.
/// The JSON layout uses camelCase keys (`scientificName`, `proTip`, ...), the
/// same layout the site has always shipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    /// Unique within the catalog; also the `/plants/<id>` path segment.
    pub id: String,
    #[serde(flatten)]
    pub info: PlantInfo,
}

/// Every descriptive field of a catalog plant except its identifier.
///
/// Split out of [`PlantRecord`] so owned-plant records can carry a copy of the
/// species data under their own synthetic id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantInfo {
    pub name: String,
    pub scientific_name: String,
    pub tagline: String,
    pub category: Vec<String>,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub hero_image: String,
    pub care: CareAttributes,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub pro_tip: String,
    #[serde(default)]
    pub mindfulness_prompt: String,
}

/// Free-text care guidance shown on cards and the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareAttributes {
    pub sunlight: String,
    pub water: String,
    pub soil: String,
    pub humidity: String,
}

impl CareAttributes {
    /// First comma-separated clause of the watering advice, used on cards.
    pub fn water_summary(&self) -> &str {
        first_clause(&self.water)
    }

    /// First comma-separated clause of the light advice, used on cards.
    pub fn sunlight_summary(&self) -> &str {
        first_clause(&self.sunlight)
    }
}

fn first_clause(text: &str) -> &str {
    text.split(',').next().unwrap_or(text).trim()
}

impl PlantRecord {
    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.info.category.iter().any(|c| c == category)
    }

    /// Description cut to at most `max_chars` characters, for card previews.
    pub fn excerpt(&self, max_chars: usize) -> String {
        excerpt(&self.info.description, max_chars)
    }
}

/// Truncates on a character boundary and appends an ellipsis when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", text[..byte_idx].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn care_summaries_take_the_first_clause() {
        let care = CareAttributes {
            sunlight: "Bright indirect light, no direct sun".into(),
            water: "Weekly".into(),
            soil: "Any".into(),
            humidity: "Any".into(),
        };
        assert_eq!(care.sunlight_summary(), "Bright indirect light");
        assert_eq!(care.water_summary(), "Weekly");
    }

    #[test]
    fn excerpt_respects_multibyte_characters() {
        assert_eq!(excerpt("héllo wörld", 5), "héllo...");
        assert_eq!(excerpt("short", 10), "short");
    }
}
