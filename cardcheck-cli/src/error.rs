use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Bad command-line usage
    #[error("{0}")]
    Usage(String),

    /// A file, set, parallel, or image that does not exist
    #[error("{0}")]
    NotFound(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Checklist loading or classification failed
    #[error("Import error: {0}")]
    Import(String),

    /// Image storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    pub(crate) fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<cardcheck_db::OperationError> for CliError {
    fn from(e: cardcheck_db::OperationError) -> Self {
        Self::database(e.to_string())
    }
}

impl From<cardcheck_import::ImportError> for CliError {
    fn from(e: cardcheck_import::ImportError) -> Self {
        match e {
            cardcheck_import::ImportError::NotFound(_) => Self::not_found(e.to_string()),
            cardcheck_import::ImportError::Db(db) => Self::database(db.to_string()),
            other => Self::import(other.to_string()),
        }
    }
}
