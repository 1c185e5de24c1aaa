use serde::Serialize;

use crate::domain::value_objects::Difficulty;

/// A persisted trivia question
///
/// Serializes to the wire shape `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// A question that has passed validation but has no id yet
///
/// # Invariants
/// - Question and answer text are not blank
/// - Difficulty is within the rating scale
///
/// Whether `category` refers to an existing category is checked against the
/// store by the caller, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: i32,
    difficulty: Difficulty,
}

impl NewQuestion {
    /// Validates the fields of a question submission
    ///
    /// # Example
    /// ```
    /// use cafe_trivia_api::domain::trivia::NewQuestion;
    ///
    /// let q = NewQuestion::new("Who?".into(), "Me".into(), 1, 2).expect("valid question");
    /// assert_eq!(q.category(), 1);
    /// assert!(NewQuestion::new("  ".into(), "Me".into(), 1, 2).is_err());
    /// ```
    pub fn new(
        question: String,
        answer: String,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, String> {
        let question = question.trim().to_string();
        let answer = answer.trim().to_string();

        if question.is_empty() {
            return Err("Question text cannot be empty".to_string());
        }
        if answer.is_empty() {
            return Err("Answer text cannot be empty".to_string());
        }
        let difficulty = Difficulty::new(difficulty)?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> i32 {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Attaches the store-assigned id
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty.value(),
        }
    }
}
