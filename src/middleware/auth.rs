use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{self, Claims};
use crate::config;
use crate::error::ApiError;

/// Authenticated principal extracted from a verified JWT.
///
/// Attached to the request extensions by [`jwt_auth_middleware`]; handlers
/// behind the gate read it and trust it unconditionally.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i32,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { user_id: claims.user_id }
    }
}

/// JWT authentication middleware for protected routes.
///
/// Every rejection, whatever its internal cause, produces the same 401 body;
/// the specific failure is only ever logged, never returned to the caller.
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers).map_err(|reason| {
        tracing::warn!("Rejected request: {}", reason);
        unauthorized()
    })?;

    let claims = auth::validate_token(&token, &config::config().security.jwt_secret).map_err(|err| {
        tracing::warn!("Token verification failed: {}", err);
        unauthorized()
    })?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

fn unauthorized() -> ApiError {
    ApiError::unauthorized("Invalid or missing authentication token")
}

/// Extract the bearer token from the Authorization header.
///
/// The "Bearer " scheme prefix is mandatory; a header that carries a bare
/// token is rejected without consulting the token service.
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, &'static str> {
    let auth_header = headers
        .get("authorization")
        .ok_or("missing Authorization header")?;

    let auth_str = auth_header.to_str().map_err(|_| "Authorization header is not valid UTF-8")?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or("Authorization header is not a Bearer token")?;

    if token.trim().is_empty() {
        return Err("empty bearer token");
    }

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_token_after_bearer_prefix() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_header_is_rejected() {
        assert!(extract_bearer_token(&HeaderMap::new()).is_err());
    }

    #[test]
    fn bare_token_without_scheme_is_rejected() {
        let headers = headers_with_auth("abc.def.ghi");
        assert!(extract_bearer_token(&headers).is_err());
    }

    #[test]
    fn wrong_scheme_is_rejected() {
        let headers = headers_with_auth("Basic dXNlcjpwYXNz");
        assert!(extract_bearer_token(&headers).is_err());
    }

    #[test]
    fn empty_bearer_value_is_rejected() {
        let headers = headers_with_auth("Bearer  ");
        assert!(extract_bearer_token(&headers).is_err());
    }
}
