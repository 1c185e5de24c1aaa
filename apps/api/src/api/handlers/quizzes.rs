use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::state::TriviaState;
use crate::domain::trivia::quiz::select_next;
use crate::domain::trivia::{Question, QuizScope};
use crate::domain::value_objects::lenient_i32;

/// Category selector sent by the quiz client; `id` 0 means all categories
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient_i32")]
    pub id: i32,
}

/// Request body for one quiz turn
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

/// Next question plus the history the client must send back next turn
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub previous_questions: Vec<i32>,
    pub question: Option<Question>,
}

/// Serve the next quiz question
///
/// POST /quizzes
///
/// Returns `question: null` once the category has no unseen questions left.
pub async fn play_quiz(
    State(state): State<TriviaState>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let pool = match QuizScope::from(req.quiz_category.id) {
        QuizScope::All => state.questions.find_all().await?,
        QuizScope::Category(id) => state.questions.find_by_category(id).await?,
    };

    let candidates: Vec<i32> = pool.iter().map(|q| q.id).collect();
    let picked = select_next(&candidates, &req.previous_questions, &mut rand::rng());

    let mut previous_questions = req.previous_questions;
    let question = picked.and_then(|id| {
        previous_questions.push(id);
        pool.into_iter().find(|q| q.id == id)
    });

    if question.is_none() {
        tracing::debug!(
            category = req.quiz_category.id,
            served = previous_questions.len(),
            "quiz exhausted"
        );
    }

    Ok(Json(QuizResponse {
        success: true,
        previous_questions,
        question,
    }))
}
