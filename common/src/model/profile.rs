use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::IdentityUser;

/// Largest profile photo accepted for local storage.
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

const DEFAULT_DISPLAY_NAME: &str = "Plant Lover";
const DEFAULT_BIO: &str = "Finding peace through plants 🌱";

/// Dashboard profile, derived from the signed-in identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    pub bio: String,
    pub joined_at: Option<DateTime<Utc>>,
    pub experience: ExperienceLevel,
}

impl UserProfile {
    pub fn from_identity(user: &IdentityUser) -> Self {
        let display_name = user
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_DISPLAY_NAME)
            .to_string();

        Self {
            display_name,
            bio: DEFAULT_BIO.to_string(),
            joined_at: user.created_at,
            experience: ExperienceLevel::default(),
        }
    }

    /// Join date formatted for display, e.g. `March 4, 2025`.
    pub fn join_date_label(&self) -> String {
        self.joined_at
            .map(|at| at.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| "recently".to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Expert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhotoError {
    #[error("Please choose an image file")]
    NotAnImage,
    #[error("Please choose an image smaller than 5MB")]
    TooLarge { size: u64 },
}

/// Checks a picked file before it is read and stored as a profile photo.
pub struct PhotoUpload;

impl PhotoUpload {
    pub fn validate(mime_type: &str, size: u64) -> Result<(), PhotoError> {
        if !mime_type.starts_with("image/") {
            return Err(PhotoError::NotAnImage);
        }
        if size > MAX_PHOTO_BYTES {
            return Err(PhotoError::TooLarge { size });
        }
        Ok(())
    }

    /// Inline `data:` URL for the stored photo.
    pub fn data_url(mime_type: &str, base64: &str) -> String {
        format!("data:{};base64,{}", mime_type, base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user(display_name: Option<&str>) -> IdentityUser {
        IdentityUser {
            uid: "u1".into(),
            email: Some("fern@example.com".into()),
            display_name: display_name.map(Into::into),
            photo_url: None,
            created_at: Some(Utc.with_ymd_and_hms(2025, 3, 4, 10, 0, 0).unwrap()),
        }
    }

    #[test]
    fn profile_defaults_when_identity_has_no_name() {
        let profile = UserProfile::from_identity(&user(Some("  ")));
        assert_eq!(profile.display_name, "Plant Lover");
        assert_eq!(profile.experience, ExperienceLevel::Beginner);
        assert_eq!(profile.join_date_label(), "March 4, 2025");
    }

    #[test]
    fn profile_uses_identity_name() {
        let profile = UserProfile::from_identity(&user(Some("Ivy")));
        assert_eq!(profile.display_name, "Ivy");
    }

    #[test]
    fn photo_validation_rejects_large_and_non_images() {
        assert_eq!(PhotoUpload::validate("image/png", 1024), Ok(()));
        assert_eq!(
            PhotoUpload::validate("application/pdf", 1024),
            Err(PhotoError::NotAnImage)
        );
        assert_eq!(
            PhotoUpload::validate("image/jpeg", MAX_PHOTO_BYTES + 1),
            Err(PhotoError::TooLarge {
                size: MAX_PHOTO_BYTES + 1
            })
        );
    }

    #[test]
    fn experience_labels_round_trip() {
        for level in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::from_label(level.label()), Some(level));
        }
        assert_eq!(ExperienceLevel::from_label("Guru"), None);
    }
}
