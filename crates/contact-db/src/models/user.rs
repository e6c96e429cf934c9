//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table, without the secret columns
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
