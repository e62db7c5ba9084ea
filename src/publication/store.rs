/// SQLite persistence layer for publications
///
/// Handles publication lookup, the pending listing (joined with authors),
/// full-row upsert, the conditional approval flip, and removal. The schema's
/// CHECK constraints keep title/content non-empty on every write, not just
/// the ones that go through service-level validation.

use crate::publication::types::{Author, PendingPublication, Publication};
use anyhow::Result;
use sqlx::{sqlite::SqlitePool, Row};

/// SQLite-backed publication store
///
/// Thin wrapper around a connection pool; every call re-reads current state,
/// no publication data is cached across calls.
#[derive(Debug, Clone)]
pub struct PublicationStore {
    /// SQLite connection pool
    pool: SqlitePool,
}

impl PublicationStore {
    /// Create new store instance with database connection
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the publication storage schema
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS publications (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL CHECK (length(title) > 0),
                content TEXT NOT NULL CHECK (length(content) > 0),
                author_id INTEGER NOT NULL REFERENCES users(id),
                pending_approval INTEGER NOT NULL DEFAULT 1,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Index for the pending listing
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_publications_pending
            ON publications(pending_approval)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Retrieve a publication by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Publication>> {
        let row = sqlx::query(
            "SELECT id, title, content, author_id, pending_approval FROM publications WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Publication {
            id: row.get("id"),
            title: row.get("title"),
            content: row.get("content"),
            author_id: row.get("author_id"),
            pending_approval: row.get("pending_approval"),
        }))
    }

    /// Retrieve an author's identifying data by user ID
    pub async fn find_author(&self, user_id: i64) -> Result<Option<Author>> {
        let row = sqlx::query("SELECT id, name, email FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Author {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
        }))
    }

    /// List all publications awaiting moderation, joined with their authors
    pub async fn find_all_pending(&self) -> Result<Vec<PendingPublication>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.title, p.content, u.id AS author_id, u.name, u.email
            FROM publications p
            JOIN users u ON u.id = p.author_id
            WHERE p.pending_approval = 1
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut pending = Vec::new();
        for row in rows {
            pending.push(PendingPublication {
                id: row.get("id"),
                title: row.get("title"),
                content: row.get("content"),
                author: Author {
                    id: row.get("author_id"),
                    name: row.get("name"),
                    email: row.get("email"),
                },
            });
        }

        Ok(pending)
    }

    /// Store a publication, overwriting any existing row with the same ID
    ///
    /// Uses UPSERT so update-in-place and seeding share one code path.
    /// Updates the updated_at timestamp automatically.
    pub async fn save(&self, publication: &Publication) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO publications (id, title, content, author_id, pending_approval, updated_at)
            VALUES (?, ?, ?, ?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                content = excluded.content,
                author_id = excluded.author_id,
                pending_approval = excluded.pending_approval,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(publication.id)
        .bind(&publication.title)
        .bind(&publication.content)
        .bind(publication.author_id)
        .bind(publication.pending_approval)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Atomically flip a publication from pending to approved
    ///
    /// The WHERE clause is the correctness guard for concurrent approvals:
    /// only one writer can observe `pending_approval = 1`, so the loser of a
    /// race gets `false` here no matter what its earlier read saw.
    pub async fn approve_if_pending(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE publications
            SET pending_approval = 0, updated_at = CURRENT_TIMESTAMP
            WHERE id = ? AND pending_approval = 1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Pool access for test fixtures that seed rows directly
    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Remove a publication by ID, reporting whether a row existed
    pub async fn remove_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM publications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// Single-connection in-memory pool; more connections would each see
    /// their own empty :memory: database.
    async fn memory_store() -> PublicationStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await
            .unwrap();
        let store = PublicationStore::new(pool);
        store.init_schema().await.unwrap();
        store
    }

    async fn seed_user(store: &PublicationStore, id: i64, name: &str, email: Option<&str>) {
        sqlx::query("INSERT INTO users (id, name, email) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(email)
            .execute(&store.pool)
            .await
            .unwrap();
    }

    fn draft(id: i64, author_id: i64) -> Publication {
        Publication {
            id,
            title: "Draft".to_string(),
            content: "Body".to_string(),
            author_id,
            pending_approval: true,
        }
    }

    #[tokio::test]
    async fn save_and_find_roundtrip() {
        let store = memory_store().await;
        seed_user(&store, 7, "Ana", Some("ana@example.com")).await;

        store.save(&draft(5, 7)).await.unwrap();

        let found = store.find_by_id(5).await.unwrap().unwrap();
        assert_eq!(found, draft(5, 7));
        assert!(store.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn pending_listing_filters_on_flag_and_joins_author() {
        let store = memory_store().await;
        seed_user(&store, 7, "Ana", Some("ana@example.com")).await;
        store.save(&draft(1, 7)).await.unwrap();
        let mut approved = draft(2, 7);
        approved.pending_approval = false;
        store.save(&approved).await.unwrap();

        let pending = store.find_all_pending().await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 1);
        assert_eq!(pending[0].author.name, "Ana");
        assert_eq!(pending[0].author.email.as_deref(), Some("ana@example.com"));
    }

    #[tokio::test]
    async fn approve_if_pending_flips_only_once() {
        let store = memory_store().await;
        seed_user(&store, 7, "Ana", None).await;
        store.save(&draft(5, 7)).await.unwrap();

        assert!(store.approve_if_pending(5).await.unwrap());
        assert!(!store.find_by_id(5).await.unwrap().unwrap().pending_approval);

        // Second writer loses: the conditional update matches no row
        assert!(!store.approve_if_pending(5).await.unwrap());
        assert!(!store.approve_if_pending(99).await.unwrap());
    }

    #[tokio::test]
    async fn remove_reports_whether_row_existed() {
        let store = memory_store().await;
        seed_user(&store, 7, "Ana", None).await;
        store.save(&draft(5, 7)).await.unwrap();

        assert!(store.remove_by_id(5).await.unwrap());
        assert!(store.find_by_id(5).await.unwrap().is_none());
        assert!(!store.remove_by_id(5).await.unwrap());
    }

    #[tokio::test]
    async fn schema_rejects_empty_title_and_content() {
        let store = memory_store().await;
        seed_user(&store, 7, "Ana", None).await;

        let mut empty_title = draft(1, 7);
        empty_title.title = String::new();
        assert!(store.save(&empty_title).await.is_err());

        let mut empty_content = draft(2, 7);
        empty_content.content = String::new();
        assert!(store.save(&empty_content).await.is_err());
    }
}
