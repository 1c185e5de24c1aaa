// Bearer token verification and permission checks

pub mod errors;
pub mod jwt;

pub use errors::AuthError;
pub use jwt::{bearer_token, issue_token, Audience, Claims, JwtVerifier, TokenVerifier};
