// Trivia domain module
// Categories, questions, and the quiz question picker

pub mod category;
pub mod question;
pub mod quiz;

pub use category::{category_labels, Category};
pub use question::{NewQuestion, Question};
pub use quiz::QuizScope;
