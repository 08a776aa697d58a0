use thiserror::Error;

/// Everything that can go wrong inside gitfolio's core.
///
/// None of these reach the user verbatim. The loader turns any of them into
/// one fixed status line and logs the detail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    ApiError(#[from] gitfolio_api::GitHubError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
