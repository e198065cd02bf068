//! Server configuration loaded from environment variables.
//!
//! The listen address has defaults for local development; the mail relay
//! credentials do not, and a missing one stops the server at startup.

use log::warn;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Env: `HOST`, default `127.0.0.1`.
    pub host: String,
    /// Env: `PORT`, default `8080`.
    pub port: u16,
    pub mail: MailConfig,
}

/// Outbound SMTP settings for the contact form relay.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Env: `SMTP_HOST`, default `smtp.gmail.com`.
    pub smtp_host: String,
    /// Env: `EMAIL_USER`. Account used to authenticate and as the sender address.
    pub user: String,
    /// Env: `EMAIL_PASS`.
    pub password: String,
    /// Env: `ADMIN_EMAIL`. Recipient of every contact message.
    pub admin_email: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| non_empty(name).ok_or(ConfigError::Missing(name));

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                warn!("Invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            mail: MailConfig {
                smtp_host: non_empty("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                user: required("EMAIL_USER")?,
                password: required("EMAIL_PASS")?,
                admin_email: required("ADMIN_EMAIL")?,
            },
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const MAIL: [(&str, &str); 3] = [
        ("EMAIL_USER", "site@example.com"),
        ("EMAIL_PASS", "app-password"),
        ("ADMIN_EMAIL", "admin@example.com"),
    ];

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup(&MAIL)).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.mail.smtp_host, "smtp.gmail.com");
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn invalid_port_falls_back() {
        let mut vars = MAIL.to_vec();
        vars.push(("PORT", "eighty"));
        assert_eq!(AppConfig::from_lookup(lookup(&vars)).unwrap().port, 8080);
    }

    #[test]
    fn mail_credentials_are_required() {
        let err = AppConfig::from_lookup(lookup(&MAIL[..2])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ADMIN_EMAIL"));

        let mut vars = MAIL.to_vec();
        vars[1] = ("EMAIL_PASS", "  ");
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("EMAIL_PASS"));
    }
}
