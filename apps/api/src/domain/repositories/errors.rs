use thiserror::Error;

/// Errors reported by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched the id of an update or delete
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    /// The store rejected the write (unique or foreign key constraint)
    #[error("Constraint violation: {0}")]
    Conflict(String),

    /// A stored value could not be decoded into the domain type
    #[error("Corrupt {entity} {id}: {reason}")]
    Corrupt {
        entity: &'static str,
        id: i32,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
