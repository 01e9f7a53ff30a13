use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdvisorError {
    /// Input-contract violations, as opposed to environment failures.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AdvisorError::InvalidInput(_) | AdvisorError::InvalidCatalog(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
