use thiserror::Error;

/// Message shown when the remote service has no candidate for a query.
pub const NOT_FOUND_MESSAGE: &str = "Disease not found.";
/// Message shown for any other failed search.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data.";

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Local dataset unavailable: {message}")]
    DatasetError { message: String },

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("Remote lookup failed: {message}")]
    RemoteFetchError { message: String },

    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Search task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            LookupError::ConfigError { .. } | LookupError::InvalidConfigValueError { .. }
        )
    }

    /// The text a user sees for this error. Search failures collapse to the two
    /// fixed UI messages; configuration problems keep their detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            e if e.is_config_error() => e.to_string(),
            _ => FETCH_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LookupError::NotFound => "Check the spelling of the disease name and search again",
            LookupError::DatasetError { .. } => {
                "Check that the local dataset exists and is a valid JSON object"
            }
            LookupError::RemoteFetchError { .. } | LookupError::ApiError(_) => {
                "Check your network connection and the remote endpoint, then search again"
            }
            LookupError::IoError(_) => "Check file paths and permissions",
            LookupError::SerializationError(_) => "Check that the JSON input is well formed",
            LookupError::ConfigError { .. } | LookupError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            LookupError::TaskError(_) => "Search again",
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        assert_eq!(LookupError::NotFound.user_friendly_message(), "Disease not found.");
        assert_eq!(
            LookupError::RemoteFetchError {
                message: "status 500".to_string()
            }
            .user_friendly_message(),
            "Failed to fetch data."
        );

        let config_error = LookupError::InvalidConfigValueError {
            field: "remote.endpoint".to_string(),
            value: "ftp://example.com".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert!(config_error.is_config_error());
        assert!(config_error
            .user_friendly_message()
            .contains("remote.endpoint"));
    }

    #[test]
    fn test_not_found_display() {
        assert!(LookupError::NotFound.is_not_found());
        assert_eq!(LookupError::NotFound.to_string(), NOT_FOUND_MESSAGE);
    }
}
