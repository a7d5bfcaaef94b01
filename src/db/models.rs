use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored password row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordRecord {
    pub id: i64,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// A password value stored more than once, with how many copies exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReusedPassword {
    pub password: String,
    pub count: i64,
}
