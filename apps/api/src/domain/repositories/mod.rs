// Repository ports
// Implemented by adapters in crate::infrastructure::repositories

pub mod category_repository;
pub mod drink_repository;
pub mod errors;
pub mod question_repository;

pub use category_repository::CategoryRepository;
pub use drink_repository::DrinkRepository;
pub use errors::{RepositoryError, RepositoryResult};
pub use question_repository::QuestionRepository;
