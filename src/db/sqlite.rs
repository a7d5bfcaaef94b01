use crate::db::models::{PasswordRecord, ReusedPassword};
use crate::db::schema::SQLITE_INIT;
use crate::error::MintError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Durable storage for generated passwords, independent of how they were
/// produced. All queries bind the password value as a parameter; it is never
/// embedded into the query text.
#[derive(Clone)]
pub struct PasswordStore {
    pool: SqlitePool,
}

impl PasswordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), MintError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new record, appended after all existing records. Returns the
    /// assigned id. Any string is accepted, including the empty string.
    pub async fn save(&self, value: &str) -> Result<i64, MintError> {
        let created_at = Utc::now().to_rfc3339();
        let res = sqlx::query("INSERT INTO generated_passwords (password, createdAt) VALUES (?, ?)")
            .bind(value)
            .bind(created_at)
            .execute(&self.pool)
            .await?;
        let id = res.last_insert_rowid();
        debug!(id, "saved password");
        Ok(id)
    }

    /// All stored password values in insertion (ascending id) order.
    /// A snapshot at call time, not a live view.
    pub async fn list_all(&self) -> Result<Vec<String>, MintError> {
        let rows = sqlx::query("SELECT password FROM generated_passwords ORDER BY passwordID")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter()
            .map(|row| row.try_get("password").map_err(MintError::from))
            .collect()
    }

    /// Full rows (ids and timestamps included), insertion order.
    pub async fn list_records(&self) -> Result<Vec<PasswordRecord>, MintError> {
        let rows = sqlx::query(
            "SELECT passwordID, password, createdAt FROM generated_passwords ORDER BY passwordID",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<PasswordRecord>, MintError> {
        let row = sqlx::query(
            "SELECT passwordID, password, createdAt FROM generated_passwords WHERE passwordID = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_model).transpose()
    }

    /// Remove every record whose value equals `value` (duplicates included).
    /// Returns the number of rows removed; a no-op delete reports `0` rather
    /// than an error. Use [`delete_by_id`](Self::delete_by_id) to remove a
    /// single specific row.
    pub async fn delete(&self, value: &str) -> Result<u64, MintError> {
        let res = sqlx::query("DELETE FROM generated_passwords WHERE password = ?")
            .bind(value)
            .execute(&self.pool)
            .await?;
        let removed = res.rows_affected();
        debug!(removed, "deleted passwords by value");
        Ok(removed)
    }

    /// Remove exactly one record by id. Returns whether a row existed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, MintError> {
        let res = sqlx::query("DELETE FROM generated_passwords WHERE passwordID = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    /// Values stored more than once, for reuse warnings.
    pub async fn reused_passwords(&self) -> Result<Vec<ReusedPassword>, MintError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT password, COUNT(*) AS n FROM generated_passwords \
             GROUP BY password HAVING n > 1 ORDER BY password",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(password, count)| ReusedPassword { password, count })
            .collect())
    }

    pub async fn count(&self) -> Result<i64, MintError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM generated_passwords")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// Destroy all records and reinitialize empty storage. The store stays
    /// usable afterwards.
    pub async fn reset(&self) -> Result<(), MintError> {
        sqlx::query("DROP TABLE IF EXISTS generated_passwords")
            .execute(&self.pool)
            .await?;
        self.init_schema().await?;
        debug!("password store reset");
        Ok(())
    }

    fn row_to_model(row: SqliteRow) -> Result<PasswordRecord, MintError> {
        let id: i64 = row.try_get("passwordID")?;
        let password: String = row.try_get("password")?;
        let created_str: String = row.try_get("createdAt")?;

        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(PasswordRecord {
            id,
            password,
            created_at,
        })
    }
}
