use axum::{extract::Path, Extension, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Deserialize)]
pub struct VariableExpenseRequest {
    pub name: String,
    pub amount: f64,
    /// Calendar date of the expense (YYYY-MM-DD); the type rejects anything else
    pub date: NaiveDate,
}

impl VariableExpenseRequest {
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

/// POST /expenses/variable - Record a dated one-off expense
pub async fn variable_post(
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<VariableExpenseRequest>,
) -> ApiResult<Value> {
    payload.validate()?;

    let pool = database::pool().await?;

    sqlx::query("INSERT INTO variable_expenses (user_id, name, amount, date) VALUES ($1, $2, $3, $4)")
        .bind(user.user_id)
        .bind(&payload.name)
        .bind(payload.amount)
        .bind(payload.date)
        .execute(pool)
        .await?;

    Ok(ApiResponse::created(json!({ "message": "Variable expense recorded" })))
}

/// PUT /expenses/variable/:id - Update one of the user's dated expenses
pub async fn variable_put(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(payload): Json<VariableExpenseRequest>,
) -> ApiResult<Value> {
    payload.validate()?;

    let pool = database::pool().await?;

    let result = sqlx::query(
        "UPDATE variable_expenses SET name = $1, amount = $2, date = $3 WHERE id = $4 AND user_id = $5",
    )
    .bind(&payload.name)
    .bind(payload.amount)
    .bind(payload.date)
    .bind(id)
    .bind(user.user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Variable expense not found"));
    }

    Ok(ApiResponse::success(json!({ "message": "Variable expense updated" })))
}

/// DELETE /expenses/variable/:id - Remove one of the user's dated expenses
pub async fn variable_delete(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    let pool = database::pool().await?;

    let result = sqlx::query("DELETE FROM variable_expenses WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user.user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::not_found("Variable expense not found"));
    }

    Ok(ApiResponse::success(json!({ "message": "Variable expense removed" })))
}
