//! Error types for SPM Consult.

use std::time::Duration;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Completion service errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} unavailable: {reason}")]
    ServiceUnavailable { provider: String, reason: String },

    #[error("Provider {provider} timed out after {timeout:?}")]
    Timeout { provider: String, timeout: Duration },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Provider {provider} rate limited, retry after {retry_after:?}")]
    RateLimited {
        provider: String,
        retry_after: Option<Duration>,
    },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },
}

/// Coarse classification of a completion failure, as reported to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceErrorKind {
    ServiceUnavailable,
    Timeout,
    InvalidResponse,
}

impl LlmError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            Self::Timeout { .. } => ServiceErrorKind::Timeout,
            Self::InvalidResponse { .. } => ServiceErrorKind::InvalidResponse,
            Self::ServiceUnavailable { .. }
            | Self::RateLimited { .. }
            | Self::AuthFailed { .. } => ServiceErrorKind::ServiceUnavailable,
        }
    }
}

/// A wizard step whose completion call failed. The step can be retried.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Could not fetch a suggested answer: {0}")]
    SuggestedAnswer(#[source] LlmError),

    #[error("Could not generate the preliminary judgement: {0}")]
    Judgement(#[source] LlmError),
}

impl WizardError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            Self::SuggestedAnswer(e) | Self::Judgement(e) => e.kind(),
        }
    }
}

/// Consulting and questioning tool errors.
#[derive(Debug, thiserror::Error)]
pub enum ConsultingError {
    #[error("Query is empty")]
    EmptyQuery,

    #[error("Completion failed: {0}")]
    Service(#[from] LlmError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_and_auth_surface_as_unavailable() {
        let rate = LlmError::RateLimited {
            provider: "openai".into(),
            retry_after: None,
        };
        let auth = LlmError::AuthFailed {
            provider: "openai".into(),
        };
        assert_eq!(rate.kind(), ServiceErrorKind::ServiceUnavailable);
        assert_eq!(auth.kind(), ServiceErrorKind::ServiceUnavailable);
    }

    #[test]
    fn wizard_error_keeps_inner_kind() {
        let err = WizardError::Judgement(LlmError::Timeout {
            provider: "openai".into(),
            timeout: Duration::from_secs(30),
        });
        assert_eq!(err.kind(), ServiceErrorKind::Timeout);
        assert!(err.to_string().contains("preliminary judgement"));
    }
}
