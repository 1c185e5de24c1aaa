use async_trait::async_trait;
use sqlx::PgPool;

use super::write_error;
use crate::domain::coffee::{Drink, Ingredient, NewDrink};
use crate::domain::repositories::{DrinkRepository, RepositoryError, RepositoryResult};

/// Row shape of the `drinks` table; the recipe is JSON text
#[derive(sqlx::FromRow)]
struct DrinkRow {
    id: i32,
    title: String,
    recipe: String,
}

impl DrinkRow {
    fn into_drink(self) -> RepositoryResult<Drink> {
        let recipe: Vec<Ingredient> =
            serde_json::from_str(&self.recipe).map_err(|e| RepositoryError::Corrupt {
                entity: "Drink",
                id: self.id,
                reason: e.to_string(),
            })?;

        Ok(Drink::from_persistence(self.id, self.title, recipe))
    }
}

/// PostgreSQL implementation of DrinkRepository
pub struct PostgresDrinkRepository {
    pool: PgPool,
}

impl PostgresDrinkRepository {
    /// Creates a new PostgresDrinkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DrinkRepository for PostgresDrinkRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Drink>> {
        let rows = sqlx::query_as::<_, DrinkRow>(
            r#"
            SELECT id, title, recipe FROM drinks ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DrinkRow::into_drink).collect()
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Drink>> {
        let row = sqlx::query_as::<_, DrinkRow>(
            r#"
            SELECT id, title, recipe FROM drinks WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(DrinkRow::into_drink).transpose()
    }

    async fn create(&self, drink: NewDrink) -> RepositoryResult<Drink> {
        let recipe = serde_json::to_string(drink.recipe())?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO drinks (title, recipe)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(drink.title())
        .bind(recipe)
        .fetch_one(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(drink.into_drink(id))
    }

    async fn update(&self, drink: &Drink) -> RepositoryResult<()> {
        let recipe = serde_json::to_string(drink.recipe())?;

        let result = sqlx::query(
            r#"
            UPDATE drinks SET title = $2, recipe = $3 WHERE id = $1
            "#,
        )
        .bind(drink.id())
        .bind(drink.title())
        .bind(recipe)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Drink", drink.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM drinks WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("Drink", id));
        }

        Ok(())
    }
}
