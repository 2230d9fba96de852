use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime. Registration is the only issuance point, so tokens are
/// long-lived rather than refreshed.
const TOKEN_TTL_DAYS: i64 = 7;

/// Claims embedded in every issued token.
///
/// The wire name `usuario_id` is part of the token contract with existing
/// clients and must not change.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "usuario_id")]
    pub user_id: i32,
    pub exp: i64,
    pub iat: i64,
}

/// Errors from token issuance and verification
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("signing secret is not configured")]
    MissingSecret,

    #[error("token is not a valid JWT")]
    Malformed,

    #[error("token declares an unsupported signing algorithm")]
    AlgorithmMismatch,

    #[error("token signature does not match")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

/// Issue a signed HS256 token for the given user id.
///
/// The secret is supplied by the caller; nothing in this module reads the
/// environment.
pub fn generate_token(user_id: i32, secret: &str) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let now = Utc::now();
    let claims = Claims {
        user_id,
        exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        iat: now.timestamp(),
    };

    // Header::default() is {"alg":"HS256","typ":"JWT"}
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(TokenError::Signing)
}

/// Verify a presented token and return its claims.
///
/// Only HS256 is accepted; a token declaring any other algorithm is rejected
/// before its signature is even looked at. The signature check runs before
/// the expiry check, and expiry has zero leeway.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidAlgorithm => TokenError::AlgorithmMismatch,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        })?;

    Ok(token_data.claims)
}
