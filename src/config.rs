//! Startup configuration read from the process environment.

use url::Url;

use crate::client::{Auth, DEFAULT_BASE_URL};
use crate::domain::ValidationError;

pub const USERNAME_VAR: &str = "CLICKSEND_USERNAME";
pub const API_KEY_VAR: &str = "CLICKSEND_API_KEY";
pub const BASE_URL_VAR: &str = "CLICKSEND_BASE_URL";

#[derive(Debug, thiserror::Error)]
/// Configuration problems. All of them abort startup.
pub enum ConfigError {
    #[error(
        "CLICKSEND_USERNAME and CLICKSEND_API_KEY environment variables are required (missing {name})"
    )]
    Missing { name: &'static str },

    #[error("{name} is not a valid http(s) URL: {value}")]
    InvalidUrl { name: &'static str, value: String },

    #[error("invalid credentials: {0}")]
    Credentials(#[from] ValidationError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub auth: Auth,
    pub base_url: Url,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());

        let username = get(USERNAME_VAR).ok_or(ConfigError::Missing { name: USERNAME_VAR })?;
        let api_key = get(API_KEY_VAR).ok_or(ConfigError::Missing { name: API_KEY_VAR })?;
        let auth = Auth::new(username, api_key)?;

        let raw_base_url = get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let base_url = parse_base_url(&raw_base_url)?;

        Ok(Self { auth, base_url })
    }
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        name: BASE_URL_VAR,
        value: value.to_owned(),
    };
    let url = Url::parse(value.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_credentials_and_default_base_url() {
        let config = Config::from_lookup(lookup(&[
            (USERNAME_VAR, "acme"),
            (API_KEY_VAR, "secret"),
        ]))
        .unwrap();

        assert_eq!(config.auth.username().as_str(), "acme");
        assert_eq!(config.base_url.as_str(), "https://rest.clicksend.com/v3");
    }

    #[test]
    fn missing_or_blank_credentials_are_fatal() {
        let err = Config::from_lookup(lookup(&[(API_KEY_VAR, "secret")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { name: USERNAME_VAR }));
        assert_eq!(
            err.to_string(),
            "CLICKSEND_USERNAME and CLICKSEND_API_KEY environment variables are required (missing CLICKSEND_USERNAME)"
        );

        let err = Config::from_lookup(lookup(&[(USERNAME_VAR, "acme"), (API_KEY_VAR, "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { name: API_KEY_VAR }));
    }

    #[test]
    fn base_url_override_must_be_http() {
        let config = Config::from_lookup(lookup(&[
            (USERNAME_VAR, "acme"),
            (API_KEY_VAR, "secret"),
            (BASE_URL_VAR, "http://localhost:8080/v3"),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/v3");

        for bad in ["not a url", "ftp://example.com/v3", "mailto:ops@example.com"] {
            let err = Config::from_lookup(lookup(&[
                (USERNAME_VAR, "acme"),
                (API_KEY_VAR, "secret"),
                (BASE_URL_VAR, bad),
            ]))
            .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidUrl { .. }), "{bad}");
        }
    }
}
