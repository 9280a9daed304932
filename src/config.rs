use crate::defines::*;
use crate::errors::ConfigurationError;

use std::path::PathBuf;

/// Api credentials read from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    /// Read credentials from the process environment.
    /// Call `load_dotenv()` beforehand for values in `.env` to be visible.
    pub fn from_env() -> Result<Credentials, ConfigurationError> {
        Credentials::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup` which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Credentials, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, API_KEY_ENV)?;
        let api_secret = required(&lookup, API_SECRET_ENV)?;

        if PLACEHOLDER_API_KEYS.contains(&api_key.as_str()) {
            return Err(ConfigurationError::Placeholder(API_KEY_ENV));
        }
        if PLACEHOLDER_API_SECRETS.contains(&api_secret.as_str()) {
            return Err(ConfigurationError::Placeholder(API_SECRET_ENV));
        }

        Ok(Credentials { api_key, api_secret })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigurationError::Missing(name)),
    }
}

/// Load `.env` from the current directory or any of its parents.
/// Variables already set in the environment win over the file.
///
/// Returns path of the loaded file, or `None` if there is none.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!("Failed to load .env file: {}", e);
            None
        }
    }
}

/// Whether an environment variable is set to a non-blank value.
pub fn is_set(name: &str) -> bool {
    std::env::var(name).map(|v| !v.trim().is_empty()).unwrap_or(false)
}
