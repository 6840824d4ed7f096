//! Environment configuration.

use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_OVERS: i32 = 20;

/// Runtime settings read from the environment.
pub struct Config {
    /// Database connection URL (`DATABASE_URL`)
    pub database_url: String,
    /// HTTP listen port (`PORT`)
    pub port: u16,
    /// Single origin allowed by CORS (`CORS_ALLOWED_ORIGIN`); any origin when unset
    pub cors_allowed_origin: Option<String>,
    /// Over limit for live innings when none is requested (`DEFAULT_MAX_OVERS`, `0` = unlimited)
    pub default_max_overs: Option<i32>,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid("PORT", e))?,
            None => DEFAULT_PORT,
        };

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let max_overs = match lookup("DEFAULT_MAX_OVERS") {
            Some(value) => {
                let overs = value
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| ConfigError::invalid("DEFAULT_MAX_OVERS", e))?;
                if overs < 0 {
                    return Err(ConfigError::invalid(
                        "DEFAULT_MAX_OVERS",
                        "must not be negative",
                    ));
                }
                overs
            }
            None => DEFAULT_MAX_OVERS,
        };

        Ok(Self {
            database_url,
            port,
            cors_allowed_origin,
            default_max_overs: (max_overs > 0).then_some(max_overs),
        })
    }
}
