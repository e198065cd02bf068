use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONTACT_SENT: &str = "Email sent successfully";
pub const CONTACT_FIELDS_REQUIRED: &str = "All fields are required";
pub const CONTACT_SEND_FAILED: &str = "Failed to send email";

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
/// Request payload for `POST /api/contact`.
/// Missing fields deserialize as empty strings so validation can report them.
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
/// JSON body of every `/api/contact` response.
pub struct ContactResponse {
    pub message: String,
}

impl ContactResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingField(&'static str),
}

impl ContactRequest {
    /// Every field must contain something other than whitespace.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ContactError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Ivy".into(),
            email: "ivy@example.com".into(),
            subject: "Hello".into(),
            message: "Love the site".into(),
        }
    }

    #[test]
    fn complete_request_is_valid() {
        assert_eq!(request().validate(), Ok(()));
    }

    #[test]
    fn blank_subject_is_reported() {
        let req = ContactRequest {
            subject: "   ".into(),
            ..request()
        };
        assert_eq!(req.validate(), Err(ContactError::MissingField("subject")));
    }

    #[test]
    fn missing_json_fields_default_to_empty() {
        let req: ContactRequest = serde_json::from_str(r#"{"name":"Ivy"}"#).unwrap();
        assert_eq!(req.validate(), Err(ContactError::MissingField("email")));
    }
}
