use async_trait::async_trait;

use crate::domain::coffee::{Drink, NewDrink};
use crate::domain::repositories::RepositoryResult;

/// Repository trait for the Drink aggregate
///
/// Implementations persist the recipe as serialized text and decode it on
/// read; undecodable rows surface as `RepositoryError::Corrupt`.
#[async_trait]
pub trait DrinkRepository: Send + Sync {
    /// All drinks, ordered by id
    async fn find_all(&self) -> RepositoryResult<Vec<Drink>>;

    /// Find a drink by its ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Drink>>;

    /// Insert a drink and return it with its assigned id
    ///
    /// A duplicate title fails with `RepositoryError::Conflict`.
    async fn create(&self, drink: NewDrink) -> RepositoryResult<Drink>;

    /// Overwrite the title and recipe of an existing drink
    async fn update(&self, drink: &Drink) -> RepositoryResult<()>;

    /// Delete a drink by ID
    async fn delete(&self, id: i32) -> RepositoryResult<()>;
}
