//! JSON bodies of the Identity Toolkit and Secure Token REST endpoints.

use chrono::{DateTime, Utc};
use common::session::IdentityUser;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

/// Response of `signUp`, `signInWithPassword` and `signInWithIdp`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub id_token: String,
    pub refresh_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OobCodeRequest<'a> {
    pub request_type: &'static str,
    pub email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest<'a> {
    pub id_token: &'a str,
    pub display_name: &'a str,
    pub return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponse {
    pub id_token: Option<String>,
    pub refresh_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest<'a> {
    pub id_token: &'a str,
}

#[derive(Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub users: Vec<AccountInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub local_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    /// Milliseconds since the epoch, sent as a string.
    pub created_at: Option<String>,
}

impl AccountInfo {
    pub fn into_user(self) -> IdentityUser {
        let created_at = self
            .created_at
            .as_deref()
            .and_then(|ms| ms.parse::<i64>().ok())
            .and_then(DateTime::<Utc>::from_timestamp_millis);
        IdentityUser {
            uid: self.local_id,
            email: self.email,
            display_name: self.display_name.filter(|n| !n.is_empty()),
            photo_url: self.photo_url.filter(|p| !p.is_empty()),
            created_at,
        }
    }
}

/// Secure Token `grant_type=refresh_token` response; snake_case on the wire.
#[derive(Deserialize)]
pub struct RefreshResponse {
    pub id_token: String,
    pub refresh_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthUriRequest<'a> {
    pub provider_id: &'static str,
    pub continue_uri: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthUriResponse {
    pub auth_uri: String,
    pub session_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInWithIdpRequest<'a> {
    pub request_uri: &'a str,
    pub session_id: &'a str,
    pub return_secure_token: bool,
    pub return_idp_credential: bool,
}

#[derive(Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// What is kept under `authSession` between visits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub id_token: String,
    pub refresh_token: String,
    pub user: IdentityUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_account_becomes_identity_user() {
        let json = r#"{
            "kind": "identitytoolkit#GetAccountInfoResponse",
            "users": [{
                "localId": "u-123",
                "email": "ivy@example.com",
                "displayName": "",
                "createdAt": "1700000000000",
                "emailVerified": false
            }]
        }"#;
        let mut response: LookupResponse = serde_json::from_str(json).unwrap();
        let user = response.users.remove(0).into_user();

        assert_eq!(user.uid, "u-123");
        assert_eq!(user.email.as_deref(), Some("ivy@example.com"));
        assert_eq!(user.display_name, None);
        assert_eq!(user.created_at.map(|at| at.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn error_envelope_exposes_the_code() {
        let json = r#"{"error":{"code":400,"message":"EMAIL_EXISTS","errors":[]}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.error.message, "EMAIL_EXISTS");
    }

    #[test]
    fn refresh_response_is_snake_case() {
        let json = r#"{"id_token":"a","refresh_token":"b","expires_in":"3600","user_id":"u"}"#;
        let refreshed: RefreshResponse = serde_json::from_str(json).unwrap();
        assert_eq!(refreshed.id_token, "a");
        assert_eq!(refreshed.refresh_token, "b");
    }
}
