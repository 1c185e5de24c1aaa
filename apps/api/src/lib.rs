//! Trivia and Coffee Shop API Library
//!
//! Two small JSON services sharing one stack: a trivia question bank with
//! quizzes, and a coffee shop menu with permission-gated management routes.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod server;
