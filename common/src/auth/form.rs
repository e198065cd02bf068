use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
    ResetPassword,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Join ZenFlora",
            AuthMode::ResetPassword => "Reset Your Password",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFormError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter your name")]
    MissingName,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

impl AuthForm {
    pub fn validate(&self, mode: AuthMode) -> Result<(), AuthFormError> {
        if self.email.trim().is_empty() {
            return Err(AuthFormError::MissingFields);
        }
        if mode == AuthMode::ResetPassword {
            return Ok(());
        }
        if self.password.is_empty() {
            return Err(AuthFormError::MissingFields);
        }
        if mode == AuthMode::SignUp {
            if self.name.trim().is_empty() {
                return Err(AuthFormError::MissingName);
            }
            if self.password != self.confirm_password {
                return Err(AuthFormError::PasswordMismatch);
            }
            if self.password.chars().count() < MIN_PASSWORD_LEN {
                return Err(AuthFormError::PasswordTooShort);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, password: &str, confirm: &str) -> AuthForm {
        AuthForm {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn sign_in_needs_email_and_password() {
        assert_eq!(
            form("", "", "secret", "").validate(AuthMode::SignIn),
            Err(AuthFormError::MissingFields)
        );
        assert_eq!(
            form("", "a@b.c", "", "").validate(AuthMode::SignIn),
            Err(AuthFormError::MissingFields)
        );
        assert_eq!(form("", "a@b.c", "x", "").validate(AuthMode::SignIn), Ok(()));
    }

    #[test]
    fn reset_only_needs_email() {
        assert_eq!(form("", "a@b.c", "", "").validate(AuthMode::ResetPassword), Ok(()));
    }

    #[test]
    fn sign_up_checks_name_confirmation_and_length() {
        assert_eq!(
            form("", "a@b.c", "secret1", "secret1").validate(AuthMode::SignUp),
            Err(AuthFormError::MissingName)
        );
        assert_eq!(
            form("Ivy", "a@b.c", "secret1", "secret2").validate(AuthMode::SignUp),
            Err(AuthFormError::PasswordMismatch)
        );
        assert_eq!(
            form("Ivy", "a@b.c", "abc", "abc").validate(AuthMode::SignUp),
            Err(AuthFormError::PasswordTooShort)
        );
        assert_eq!(form("Ivy", "a@b.c", "secret1", "secret1").validate(AuthMode::SignUp), Ok(()));
    }
}
