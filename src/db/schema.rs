//! SQL DDL for initializing the password storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `passwordID` INTEGER PRIMARY KEY AUTOINCREMENT, so ids are
///   monotonically increasing and never reused after a delete
/// - `password` TEXT, deliberately not UNIQUE (duplicates are allowed)
/// - `createdAt` RFC3339 insertion timestamp
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS generated_passwords (
    passwordID INTEGER PRIMARY KEY AUTOINCREMENT,
    password TEXT NOT NULL,
    createdAt TEXT NOT NULL
);
"#;
