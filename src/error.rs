use thiserror::Error;

/// Unified error type for version-info operations
#[derive(Error, Debug)]
pub enum VersionInfoError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Git command failed: {0}")]
    Command(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Repository URL error: {0}")]
    Repository(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Code name error: {0}")]
    CodeName(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in version-info
pub type Result<T> = std::result::Result<T, VersionInfoError>;

impl VersionInfoError {
    /// Create a git command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        VersionInfoError::Command(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        VersionInfoError::Manifest(msg.into())
    }

    /// Create a repository URL error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        VersionInfoError::Repository(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        VersionInfoError::Version(msg.into())
    }

    /// Create a code name error with context
    pub fn code_name(msg: impl Into<String>) -> Self {
        VersionInfoError::CodeName(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionInfoError::Config(msg.into())
    }
}
