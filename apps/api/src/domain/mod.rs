// Domain layer module exports
// Domain is independent of HTTP and database concerns

pub mod coffee;
pub mod pagination;
pub mod repositories;
pub mod trivia;
pub mod value_objects;
