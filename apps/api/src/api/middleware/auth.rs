use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::auth::{bearer_token, AuthError, Claims, TokenVerifier};

/// Permission requirement attached to a single route
///
/// Usage:
/// ```rust,ignore
/// let gate = PermissionGate::new(verifier.clone(), "post:drinks");
/// post(create_drink).route_layer(from_fn_with_state(gate, require_permission))
/// ```
#[derive(Clone)]
pub struct PermissionGate {
    verifier: Arc<dyn TokenVerifier>,
    permission: &'static str,
}

impl PermissionGate {
    pub fn new(verifier: Arc<dyn TokenVerifier>, permission: &'static str) -> Self {
        Self {
            verifier,
            permission,
        }
    }

    /// Verifies the bearer token and checks the required permission
    pub fn authorize(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        let token = bearer_token(headers)?;
        let claims = self.verifier.verify(token)?;
        claims.check_permission(self.permission)?;
        Ok(claims)
    }
}

/// Middleware that lets the request through only with the gate's permission
///
/// On success the verified claims are stored in the request extensions.
pub async fn require_permission(
    State(gate): State<PermissionGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = gate.authorize(request.headers())?;

    tracing::debug!(
        subject = %claims.sub,
        permission = gate.permission,
        "request authorized"
    );
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{issue_token, JwtVerifier};
    use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
    use chrono::Duration;

    const SECRET: &str = "gate-secret";

    fn gate(permission: &'static str) -> PermissionGate {
        PermissionGate::new(Arc::new(JwtVerifier::new(SECRET, None, None)), permission)
    }

    fn headers_for(permissions: &[&str]) -> HeaderMap {
        let claims = Claims::new("tester", permissions.iter().copied(), Duration::hours(1));
        let token = issue_token(&claims, SECRET).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[test]
    fn granted_permission_passes() {
        let claims = gate("patch:drinks")
            .authorize(&headers_for(&["patch:drinks", "delete:drinks"]))
            .unwrap();
        assert_eq!(claims.sub, "tester");
    }

    #[test]
    fn other_permission_is_forbidden() {
        let err = gate("delete:drinks")
            .authorize(&headers_for(&["patch:drinks"]))
            .unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn missing_header_is_unauthorized() {
        let err = gate("post:drinks").authorize(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
