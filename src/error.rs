//! Unified error types for PetView
//!
//! Provides a consistent error handling approach across all modules.

use crate::core::Tab;
use crate::store::PetId;

/// Unified error type for PetView operations
#[derive(Debug, thiserror::Error)]
pub enum PetviewError {
    /// A tab outside the navigator's tab set was selected
    #[error("Invalid tab: {0} is not part of this navigator")]
    InvalidTab(Tab),

    /// No pet with the given id exists (anymore)
    #[error("Pet not found: #{0}")]
    PetNotFound(PetId),

    /// Rejected pet data
    #[error("Invalid pet: {0}")]
    InvalidPet(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// I/O errors (data files, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Data file parse errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type using PetviewError
pub type Result<T> = std::result::Result<T, PetviewError>;

impl PetviewError {
    /// Create an InvalidPet error
    pub fn invalid_pet(msg: impl Into<String>) -> Self {
        Self::InvalidPet(msg.into())
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
