use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::api::errors::ApiError;
use crate::api::extract::{ApiPath, PageQuery};
use crate::api::state::TriviaState;
use crate::domain::pagination::{paginate, QUESTIONS_PER_PAGE};
use crate::domain::trivia::{category_labels, Question};

/// Response listing every category
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

/// Response for the questions of one category
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// List all categories as an id -> label map
///
/// GET /categories
pub async fn get_categories(
    State(state): State<TriviaState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.categories.find_all().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_labels(&categories),
    }))
}

/// Paginated questions of a single category
///
/// GET /categories/:id/questions
pub async fn get_category_questions(
    State(state): State<TriviaState>,
    ApiPath(category_id): ApiPath<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = state
        .categories
        .find_by_id(category_id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    let questions = state.questions.find_by_category(category.id).await?;
    let total_questions = questions.len();

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(questions, query.page(), QUESTIONS_PER_PAGE),
        total_questions,
        current_category: category.kind,
    }))
}
