use async_trait::async_trait;

use crate::domain::repositories::RepositoryResult;
use crate::domain::trivia::Category;

/// Read access to trivia categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Category>>;

    /// Find a category by its ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
}
