// Shared application state
// Built once at start-up and handed to the router; handlers never reach for globals.

use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::domain::repositories::{CategoryRepository, DrinkRepository, QuestionRepository};
use crate::infrastructure::repositories::{
    PostgresCategoryRepository, PostgresDrinkRepository, PostgresQuestionRepository,
};

/// Dependencies of the trivia routes
#[derive(Clone)]
pub struct TriviaState {
    pub categories: Arc<dyn CategoryRepository>,
    pub questions: Arc<dyn QuestionRepository>,
}

impl TriviaState {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            categories,
            questions,
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresCategoryRepository::new(pool.clone())),
            Arc::new(PostgresQuestionRepository::new(pool)),
        )
    }
}

/// Dependencies of the coffee shop routes
#[derive(Clone)]
pub struct CoffeeState {
    pub drinks: Arc<dyn DrinkRepository>,
    pub verifier: Arc<dyn TokenVerifier>,
}

impl CoffeeState {
    pub fn new(drinks: Arc<dyn DrinkRepository>, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { drinks, verifier }
    }

    /// State backed by a PostgreSQL drink repository
    pub fn postgres(pool: PgPool, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self::new(Arc::new(PostgresDrinkRepository::new(pool)), verifier)
    }
}
