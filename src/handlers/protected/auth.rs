use axum::Extension;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// GET /auth/whoami - Echo the identity bound to the presented token
///
/// Mostly useful for clients checking whether a stored token is still
/// accepted without touching any data.
pub async fn whoami(Extension(user): Extension<AuthUser>) -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({ "id": user.user_id })))
}
