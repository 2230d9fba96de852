use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub profile_photo: Option<String>,
    pub role: Option<String>,
    pub monthly_income: Option<f64>,
    pub created_at: DateTime<Utc>,
}
