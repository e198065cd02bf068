//! Identity provider error taxonomy and sign-in form validation.
//!
//! Provider failures arrive as string codes, either SDK style
//! (`auth/user-not-found`) or REST style (`EMAIL_NOT_FOUND`, sometimes with a
//! `" : detail"` suffix). [`AuthError::from_code`] folds both into a fixed set of
//! user-facing messages; unknown codes collapse to a generic fallback.

pub mod form;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("No account found with this email address.")]
    UnknownAccount,

    #[error("Incorrect password. Please try again.")]
    WrongPassword,

    #[error("An account with this email already exists.")]
    EmailAlreadyRegistered,

    #[error("Password is too weak. Please choose a stronger password.")]
    WeakPassword,

    #[error("Please enter a valid email address.")]
    MalformedEmail,

    #[error("Too many attempts. Please try again later.")]
    TooManyAttempts,

    #[error("Invalid login credentials. Please try again.")]
    InvalidCredentials,

    #[error("Sign-in was cancelled.")]
    PopupDismissed,

    /// The stored session can no longer be refreshed; the user must sign in again.
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,

    #[error("Something went wrong. Please try again.")]
    Other(String),
}

impl AuthError {
    pub fn from_code(code: &str) -> Self {
        let code = code.split(" : ").next().unwrap_or(code).trim();
        match code {
            "auth/user-not-found" | "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => {
                AuthError::UnknownAccount
            }
            "auth/wrong-password" | "INVALID_PASSWORD" => AuthError::WrongPassword,
            "auth/email-already-in-use" | "EMAIL_EXISTS" => AuthError::EmailAlreadyRegistered,
            "auth/weak-password" | "WEAK_PASSWORD" => AuthError::WeakPassword,
            "auth/invalid-email" | "INVALID_EMAIL" | "MISSING_EMAIL" => AuthError::MalformedEmail,
            "auth/too-many-requests" | "TOO_MANY_ATTEMPTS_TRY_LATER" => {
                AuthError::TooManyAttempts
            }
            "auth/invalid-credential" | "INVALID_LOGIN_CREDENTIALS" | "INVALID_IDP_RESPONSE" => {
                AuthError::InvalidCredentials
            }
            "auth/popup-closed-by-user" | "auth/cancelled-popup-request" | "access_denied" => {
                AuthError::PopupDismissed
            }
            "TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" | "USER_DISABLED" | "INVALID_ID_TOKEN" => {
                AuthError::SessionExpired
            }
            other => AuthError::Other(other.to_string()),
        }
    }

    /// Whether the error means the stored session should be discarded.
    pub fn ends_session(&self) -> bool {
        matches!(self, AuthError::SessionExpired | AuthError::UnknownAccount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdk_and_rest_codes_map_to_the_same_error() {
        assert_eq!(AuthError::from_code("auth/user-not-found"), AuthError::UnknownAccount);
        assert_eq!(AuthError::from_code("EMAIL_NOT_FOUND"), AuthError::UnknownAccount);
        assert_eq!(
            AuthError::from_code("auth/email-already-in-use"),
            AuthError::EmailAlreadyRegistered
        );
        assert_eq!(AuthError::from_code("EMAIL_EXISTS"), AuthError::EmailAlreadyRegistered);
    }

    #[test]
    fn rest_detail_suffix_is_ignored() {
        assert_eq!(
            AuthError::from_code("WEAK_PASSWORD : Password should be at least 6 characters"),
            AuthError::WeakPassword
        );
    }

    #[test]
    fn unknown_codes_use_the_generic_message() {
        let err = AuthError::from_code("auth/quota-exceeded");
        assert_eq!(err, AuthError::Other("auth/quota-exceeded".into()));
        assert_eq!(err.to_string(), "Something went wrong. Please try again.");
    }

    #[test]
    fn messages() {
        assert_eq!(
            AuthError::TooManyAttempts.to_string(),
            "Too many attempts. Please try again later."
        );
        assert_eq!(AuthError::PopupDismissed.to_string(), "Sign-in was cancelled.");
    }
}
