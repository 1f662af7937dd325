//! Database operations for contact messages.
//!
//! `MessageStore` is the one store handle in the process. It is constructed
//! once at startup around the connection pool and cloned into every handler
//! through the application state, so no handler touches a bare pool or a
//! global.

use sqlx::SqlitePool;

use super::model::Message;

/// Store handle for the `messages` table.
///
/// All methods issue a single query and surface `sqlx::Error` unchanged;
/// mapping to HTTP status codes happens in the handlers.
#[derive(Clone)]
pub struct MessageStore {
    pool: SqlitePool,
}

impl MessageStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Check whether a record with the given id already exists.
    ///
    /// Used by the ID allocator before every insert.
    pub async fn id_exists(&self, id: &str) -> Result<bool, sqlx::Error> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM messages WHERE id = ?)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Insert a full record. Fails if the id is already taken; the primary
    /// key on `id` closes the window between the allocator's existence check
    /// and this insert.
    pub async fn insert(&self, record: &Message) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, name, email, message, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.message)
        .bind(record.status)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetch one record by id.
    pub async fn fetch(&self, id: &str) -> Result<Option<Message>, sqlx::Error> {
        sqlx::query_as::<_, Message>(
            "SELECT id, name, email, message, status FROM messages WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Fetch every record in store-native order. No ORDER BY on purpose:
    /// the contract does not guarantee any ordering.
    pub async fn fetch_all(&self) -> Result<Vec<Message>, sqlx::Error> {
        sqlx::query_as::<_, Message>("SELECT id, name, email, message, status FROM messages")
            .fetch_all(&self.pool)
            .await
    }

    /// Replace the four mutable fields of a record in one statement.
    ///
    /// Returns the number of rows matched; zero means the id does not exist
    /// and the caller reports not-found. This is not an upsert.
    pub async fn update_full(
        &self,
        id: &str,
        name: &str,
        email: &str,
        message: &str,
        status: bool,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE messages
            SET name = ?, email = ?, message = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(message)
        .bind(status)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Mutate only the status flag. Same matched-count contract as
    /// [`update_full`](Self::update_full).
    pub async fn update_status(&self, id: &str, status: bool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE messages SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a record by id. Deleting an absent id is not an error here or
    /// at the handler; delete is idempotent by contract.
    pub async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
