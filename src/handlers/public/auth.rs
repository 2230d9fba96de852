use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth;
use crate::config;
use crate::database;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub profile_photo: Option<String>,
    pub role: Option<String>,
    pub monthly_income: Option<f64>,
}

/// POST /auth/register - Create a user account and issue its bearer token
///
/// The returned token is the only session record there is; clients present
/// it on every subsequent request.
pub async fn register_post(Json(payload): Json<RegisterRequest>) -> ApiResult<Value> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::bad_request("The 'name' field must not be empty"));
    }

    let pool = database::pool().await?;

    let (user_id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO users (name, profile_photo, role, monthly_income)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.profile_photo)
    .bind(&payload.role)
    .bind(payload.monthly_income)
    .fetch_one(pool)
    .await?;

    let token = auth::generate_token(user_id, &config::config().security.jwt_secret).map_err(|e| {
        tracing::error!("Failed to issue token for user {}: {}", user_id, e);
        ApiError::internal_server_error("Failed to issue authentication token")
    })?;

    tracing::info!("Registered user {}", user_id);

    Ok(ApiResponse::created(json!({
        "id": user_id,
        "token": token
    })))
}
