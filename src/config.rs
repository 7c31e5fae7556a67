//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;
use crate::llm::LlmConfig;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Completion service settings.
    pub llm: LlmConfig,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Sessions idle for this long are discarded.
    pub session_idle_timeout: Duration,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let model = lookup("SPM_CONSULT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base =
            lookup("SPM_CONSULT_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let port: u16 = parse_or(&lookup, "SPM_CONSULT_PORT", 8080)?;
        let timeout_secs: u64 = parse_or(&lookup, "SPM_CONSULT_LLM_TIMEOUT_SECS", 60)?;
        let idle_minutes: u64 = parse_or(&lookup, "SPM_CONSULT_SESSION_IDLE_MIN", 60)?;
        let idle_secs = idle_minutes
            .checked_mul(60)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "SPM_CONSULT_SESSION_IDLE_MIN".to_string(),
                message: format!("{idle_minutes} minutes is out of range"),
            })?;

        Ok(Self {
            llm: LlmConfig {
                api_base,
                api_key: secrecy::SecretString::from(api_key),
                model,
                timeout: Duration::from_secs(timeout_secs),
            },
            port,
            session_idle_timeout: Duration::from_secs(idle_secs),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{raw:?}: {e}"),
        }),
    }
}
