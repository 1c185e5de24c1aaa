// HTTP middleware: permission gate and response shaping

pub mod auth;
pub mod fallback;

pub use auth::{require_permission, PermissionGate};
