use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::errors::ApiError;
use crate::api::extract::{ApiJson, ApiPath, PageQuery};
use crate::api::state::TriviaState;
use crate::domain::pagination::{paginate, QUESTIONS_PER_PAGE};
use crate::domain::trivia::{category_labels, NewQuestion, Question};
use crate::domain::value_objects::lenient_i32;

/// Request body for creating a question
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "lenient_i32")]
    pub category: i32,
    #[serde(deserialize_with = "lenient_i32")]
    pub difficulty: i32,
}

/// Request body for a question search
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", alias = "search_term")]
    pub search_term: String,
}

/// One page of questions with the category map
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
    pub categories: BTreeMap<i32, String>,
}

/// Search results with the categories that occur among the matches
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: BTreeMap<i32, String>,
    pub categories: BTreeMap<i32, String>,
}

/// Response from question creation
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Response from question deletion
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Page through all questions
///
/// GET /questions
pub async fn list_questions(
    State(state): State<TriviaState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let questions = state.questions.find_all().await?;
    let categories = state.categories.find_all().await?;
    let total_questions = questions.len();

    Ok(Json(QuestionListResponse {
        success: true,
        questions: paginate(questions, query.page(), QUESTIONS_PER_PAGE),
        total_questions,
        current_category: None,
        categories: category_labels(&categories),
    }))
}

/// Delete a question
///
/// DELETE /questions/:id
pub async fn delete_question(
    State(state): State<TriviaState>,
    ApiPath(id): ApiPath<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<DeletedResponse>, ApiError> {
    state
        .questions
        .find_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    state.questions.delete(id).await.map_err(ApiError::from_write)?;
    tracing::info!(question_id = id, "question deleted");

    let questions = state.questions.find_all().await?;
    let total_questions = questions.len();

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        questions: paginate(questions, query.page(), QUESTIONS_PER_PAGE),
        total_questions,
    }))
}

/// Create a new question
///
/// POST /questions
///
/// Every store failure on this route, including the refresh after the
/// insert, is reported as 422.
pub async fn create_question(
    State(state): State<TriviaState>,
    Query(query): Query<PageQuery>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new_question = NewQuestion::new(req.question, req.answer, req.category, req.difficulty)
        .map_err(|reason| {
            tracing::warn!(%reason, "invalid question");
            ApiError::unprocessable()
        })?;

    if state
        .categories
        .find_by_id(new_question.category())
        .await
        .map_err(ApiError::from_write)?
        .is_none()
    {
        tracing::warn!(category = new_question.category(), "unknown category");
        return Err(ApiError::unprocessable());
    }

    let created = state
        .questions
        .create(new_question)
        .await
        .map_err(ApiError::from_write)?;
    tracing::info!(question_id = created.id, category = created.category, "question created");

    let questions = state
        .questions
        .find_all()
        .await
        .map_err(ApiError::from_write)?;
    let total_questions = questions.len();

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        questions: paginate(questions, query.page(), QUESTIONS_PER_PAGE),
        total_questions,
    }))
}

/// Case-insensitive substring search over question text
///
/// POST /searchQuestions
pub async fn search_questions(
    State(state): State<TriviaState>,
    Query(query): Query<PageQuery>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let matches = state.questions.search(&req.search_term).await?;
    let categories = state.categories.find_all().await?;
    let labels = category_labels(&categories);

    let current_category = matches
        .iter()
        .filter_map(|q| labels.get(&q.category).map(|label| (q.category, label.clone())))
        .collect();
    let total_questions = matches.len();

    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(matches, query.page(), QUESTIONS_PER_PAGE),
        total_questions,
        current_category,
        categories: labels,
    }))
}
