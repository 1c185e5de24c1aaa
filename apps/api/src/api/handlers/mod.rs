// HTTP handlers, one module per resource

pub mod categories;
pub mod drinks;
pub mod health;
pub mod questions;
pub mod quizzes;
