use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Income {
    pub id: i32,
    pub user_id: i32,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}
