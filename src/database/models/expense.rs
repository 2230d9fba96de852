use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Recurring monthly expense (rent, subscriptions, ...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FixedExpense {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

/// One-off expense tied to a calendar date
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VariableExpense {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
