// Repository implementations (data access layer)
// PostgreSQL adapters for the domain repository ports

pub mod postgres_category_repository;
pub mod postgres_drink_repository;
pub mod postgres_question_repository;

pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_drink_repository::PostgresDrinkRepository;
pub use postgres_question_repository::PostgresQuestionRepository;

use crate::domain::repositories::RepositoryError;

/// Maps a failed INSERT/UPDATE to a repository error
///
/// Constraint violations become `Conflict` so callers can report them as
/// rejected input rather than as a server fault.
pub(crate) fn write_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() || db.is_foreign_key_violation() || db.is_check_violation() {
            return RepositoryError::Conflict(db.message().to_string());
        }
    }
    RepositoryError::Database(err)
}
