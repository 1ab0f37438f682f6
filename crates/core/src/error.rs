use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindscopeError {
    #[error("Invalid identifier '{identifier}': {reason}")]
    InvalidIdentifier { identifier: String, reason: String },
    #[error("Type '{name}' not found in index.{context}")]
    TypeNotFound { name: String, context: String },
    #[error(
        "Duplicate type name '{name}' in {index} index: existing entry is a {existing}, new entry is a {new}"
    )]
    DuplicateIndexEntry {
        name: String,
        index: &'static str,
        existing: &'static str,
        new: &'static str,
    },
    #[error("Raw element collection must not be empty")]
    EmptyInput,
    #[error("Invalid element: {0}")]
    InvalidElement(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BindscopeError {
    pub fn invalid_identifier(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        BindscopeError::InvalidIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error aborts a build (as opposed to I/O around it).
    pub fn is_fatal_build_error(&self) -> bool {
        matches!(
            self,
            BindscopeError::InvalidIdentifier { .. }
                | BindscopeError::TypeNotFound { .. }
                | BindscopeError::DuplicateIndexEntry { .. }
                | BindscopeError::InvalidElement(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BindscopeError>;
