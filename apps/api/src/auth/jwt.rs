// JWT verification for permission-gated routes
// HS256 tokens carrying a `permissions` claim

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::errors::AuthError;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user id at the identity provider)
/// * `exp` - Expiry time (seconds since epoch)
/// * `permissions` - Granted permission strings, e.g. `post:drinks`
/// * `aud` - One audience or a list of them
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// `aud` claim; identity providers send either a string or an array
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Audience {
    One(String),
    Many(Vec<String>),
}

impl Audience {
    pub fn contains(&self, audience: &str) -> bool {
        match self {
            Audience::One(aud) => aud == audience,
            Audience::Many(auds) => auds.iter().any(|aud| aud == audience),
        }
    }
}

impl From<&str> for Audience {
    fn from(audience: &str) -> Self {
        Audience::One(audience.to_string())
    }
}

impl Claims {
    /// Builds claims that expire `ttl` from now
    pub fn new<I, P>(subject: impl Into<String>, permissions: I, ttl: Duration) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let expiry = Utc::now() + ttl;
        Self {
            sub: subject.into(),
            exp: expiry.timestamp().max(0) as usize,
            permissions: Some(permissions.into_iter().map(Into::into).collect()),
            aud: None,
            iss: None,
        }
    }

    /// Requires `permission` to be granted by these claims
    ///
    /// # Example
    /// ```
    /// use cafe_trivia_api::auth::Claims;
    /// use chrono::Duration;
    ///
    /// let claims = Claims::new("barista", ["post:drinks"], Duration::hours(1));
    /// assert!(claims.check_permission("post:drinks").is_ok());
    /// assert!(claims.check_permission("delete:drinks").is_err());
    /// ```
    pub fn check_permission(&self, permission: &str) -> Result<(), AuthError> {
        let granted = self
            .permissions
            .as_ref()
            .ok_or_else(AuthError::permissions_missing)?;

        if granted.iter().any(|p| p == permission) {
            Ok(())
        } else {
            Err(AuthError::permission_denied())
        }
    }
}

/// Validates bearer tokens
///
/// The HTTP layer only depends on this trait, so another identity provider
/// can be plugged in without touching the routes.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}

/// HS256 verifier with optional audience and issuer checks
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str, audience: Option<&str>, issuer: Option<&str>) -> Self {
        let mut validation = Validation::default();
        // Configured claims must be present, not only matching when sent
        match audience {
            Some(aud) => {
                validation.set_audience(&[aud]);
                validation.required_spec_claims.insert("aud".to_string());
            }
            None => validation.validate_aud = false,
        }
        if let Some(iss) = issuer {
            validation.set_issuer(&[iss]);
            validation.required_spec_claims.insert("iss".to_string());
        }

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::token_expired(),
                ErrorKind::InvalidAudience
                | ErrorKind::InvalidIssuer
                | ErrorKind::MissingRequiredClaim(_) => AuthError::invalid_claims(),
                _ => AuthError::unparseable(),
            })
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(AuthError::header_missing)?
        .to_str()
        .map_err(|_| AuthError::invalid_header("Authorization header is not valid text."))?;

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), _, _) if !scheme.eq_ignore_ascii_case("bearer") => Err(
            AuthError::invalid_header("Authorization header must start with \"Bearer\"."),
        ),
        (Some(_), Some(token), None) => Ok(token),
        (Some(_), None, _) => Err(AuthError::invalid_header("Token not found.")),
        _ => Err(AuthError::invalid_header(
            "Authorization header must be bearer token.",
        )),
    }
}

/// Signs claims with the shared secret
///
/// Used by tests and local tooling to mint tokens the verifier accepts.
///
/// # Example
/// ```
/// use cafe_trivia_api::auth::{issue_token, Claims, JwtVerifier, TokenVerifier};
/// use chrono::Duration;
///
/// let claims = Claims::new("manager", ["delete:drinks"], Duration::hours(1));
/// let token = issue_token(&claims, "secret").unwrap();
///
/// let verified = JwtVerifier::new("secret", None, None).verify(&token).unwrap();
/// assert_eq!(verified.sub, "manager");
/// ```
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}
