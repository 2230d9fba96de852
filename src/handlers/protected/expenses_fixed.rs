use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct FixedExpenseRequest {
    pub name: String,
    pub amount: f64,
}

impl FixedExpenseRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::bad_request("The 'name' field must not be empty"));
        }
        if self.amount <= 0.0 {
            return Err(ApiError::bad_request("The 'amount' field must be greater than zero"));
        }
        Ok(())
    }
}

/// POST /expenses/fixed - Record a recurring expense
pub async fn fixed_post(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<FixedExpenseRequest>,
) -> ApiResult<Value> {
    payload.validate()?;

    let pool = database::pool().await?;

    sqlx::query("INSERT INTO fixed_expenses (user_id, name, amount) VALUES ($1, $2, $3)")
        .bind(user.user_id)
        .bind(&payload.name)
        .bind(payload.amount)
        .execute(pool)
        .await?;

    Ok(ApiResponse::created(json!({ "message": "Fixed expense recorded" })))
}

/// PUT /expenses/fixed/:id - Update one of the user's recurring expenses
pub async fn fixed_put(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(payload): Json<FixedExpenseRequest>,
) -> ApiResult<Value> {
    payload.validate()?;

    let pool = database::pool().await?;

    // The user_id guard keeps one user from touching another's rows
    let result = sqlx::query("UPDATE fixed_expenses SET name = $1, amount = $2 WHERE id = $3 AND user_id = $4")
        .bind(&payload.name)
        .bind(payload.amount)
        .bind(id)
        .bind(user.user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Fixed expense not found"));
    }

    Ok(ApiResponse::success(json!({ "message": "Fixed expense updated" })))
}

/// DELETE /expenses/fixed/:id - Remove one of the user's recurring expenses
pub async fn fixed_delete(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    let pool = database::pool().await?;

    let result = sqlx::query("DELETE FROM fixed_expenses WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user.user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Fixed expense not found"));
    }

    Ok(ApiResponse::success(json!({ "message": "Fixed expense removed" })))
}
