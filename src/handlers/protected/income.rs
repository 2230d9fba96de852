use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct IncomeRequest {
    pub amount: f64,
}

/// POST /income - Record an income entry for the authenticated user
pub async fn income_post(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<IncomeRequest>,
) -> ApiResult<Value> {
    if payload.amount <= 0.0 {
        return Err(ApiError::bad_request("The 'amount' field must be greater than zero"));
    }

    let pool = database::pool().await?;

    sqlx::query("INSERT INTO income (user_id, amount) VALUES ($1, $2)")
        .bind(user.user_id)
        .bind(payload.amount)
        .execute(pool)
        .await?;

    Ok(ApiResponse::created(json!({ "message": "Income recorded" })))
}
