use async_trait::async_trait;

use crate::domain::repositories::RepositoryResult;
use crate::domain::trivia::{NewQuestion, Question};

/// Repository trait for trivia questions
///
/// Every listing is ordered by id so that pages are stable between requests.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions
    async fn find_all(&self) -> RepositoryResult<Vec<Question>>;

    /// Questions belonging to one category
    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case
    ///
    /// The term is matched literally; wildcard characters have no special meaning.
    async fn search(&self, term: &str) -> RepositoryResult<Vec<Question>>;

    /// Find a question by its ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>>;

    /// Insert a question and return it with its assigned id
    async fn create(&self, question: NewQuestion) -> RepositoryResult<Question>;

    /// Delete a question by ID
    ///
    /// Fails with `RepositoryError::NotFound` if nothing was deleted.
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
}
