use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MediaPost {
    pub id: i64,
    pub caption: String,
    pub url: String,
    pub file_type: String,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

/// A row waiting for its id and `created_at`, both assigned by the database.
#[derive(Debug, Clone)]
pub struct NewMediaPost {
    pub caption: String,
    pub url: String,
    pub file_type: String,
    pub file_name: String,
}
