use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database;
use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub role: Option<String>,
    pub monthly_income: Option<f64>,
    pub profile_photo: Option<String>,
}

/// GET /users/:id - Fetch a user profile
pub async fn user_get(Path(id): Path<i32>) -> ApiResult<User> {
    let pool = database::pool().await?;

    let user: Option<User> = sqlx::query_as(
        "SELECT id, name, profile_photo, role, monthly_income, created_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match user {
        Some(user) => Ok(ApiResponse::success(user)),
        None => Err(ApiError::not_found("User not found")),
    }
}

/// PATCH /users - Partially update the authenticated user's profile
///
/// Absent fields keep their current value; COALESCE does the merging so the
/// statement stays a single fixed parameterized query.
pub async fn user_patch(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<Value> {
    if payload.role.is_none() && payload.monthly_income.is_none() && payload.profile_photo.is_none() {
        return Err(ApiError::bad_request("At least one field must be provided"));
    }

    let pool = database::pool().await?;

    let result = sqlx::query(
        r#"
        UPDATE users
        SET role = COALESCE($1, role),
            monthly_income = COALESCE($2, monthly_income),
            profile_photo = COALESCE($3, profile_photo)
        WHERE id = $4
        "#,
    )
    .bind(&payload.role)
    .bind(payload.monthly_income)
    .bind(&payload.profile_photo)
    .bind(user.user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("User not found"));
    }

    Ok(ApiResponse::success(json!({ "message": "User updated" })))
}
