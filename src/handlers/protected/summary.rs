use axum::Extension;
use serde::Serialize;

use crate::database;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_fixed_expenses: f64,
    pub total_variable_expenses: f64,
    pub available_balance: f64,
}

async fn sum_for_user(pool: &sqlx::PgPool, table: &str, user_id: i32) -> Result<f64, sqlx::Error> {
    // Table names come from the fixed list below, never from request input
    let sql = format!("SELECT COALESCE(SUM(amount), 0) FROM {} WHERE user_id = $1", table);
    let (total,): (f64,) = sqlx::query_as(&sql).bind(user_id).fetch_one(pool).await?;
    Ok(total)
}

/// GET /summary - Financial summary for the authenticated user
pub async fn summary_get(Extension(user): Extension<AuthUser>) -> ApiResult<Summary> {
    let pool = database::pool().await?;

    let total_income = sum_for_user(pool, "income", user.user_id).await?;
    let total_fixed_expenses = sum_for_user(pool, "fixed_expenses", user.user_id).await?;
    let total_variable_expenses = sum_for_user(pool, "variable_expenses", user.user_id).await?;

    Ok(ApiResponse::success(Summary {
        total_income,
        total_fixed_expenses,
        total_variable_expenses,
        available_balance: total_income - total_fixed_expenses - total_variable_expenses,
    }))
}
