// Repository layer for database operations

use anyhow::Result;
use sqlx::PgPool;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Run embedded migrations (creates `venue` and `event` tables)
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ============================================
    // Venues (managed outside this service, read-only here)
    // ============================================

    /// Resolve a venue name to its id. Exact, case-sensitive match;
    /// an unknown name is `Ok(None)`, not an error.
    pub async fn find_venue_id(&self, name: &str) -> Result<Option<i32>> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT id
            FROM venue
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    // ============================================
    // Events
    // ============================================

    /// Insert an event and read back its generated id in one transaction.
    /// The commit happens only after the id is obtained.
    pub async fn insert_event(&self, input: CreateEventRow) -> Result<EventRow> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, EventRow>(
            r#"
            WITH inserted AS (
                INSERT INTO event (venue, name, date, type)
                VALUES ($1, $2, $3, $4)
                RETURNING id, venue, name, date, type
            )
            SELECT i.id, i.venue, i.name, i.date, i.type AS event_type, v.name AS venue_name
            FROM inserted i
            JOIN venue v ON v.id = i.venue
            "#,
        )
        .bind(input.venue_id)
        .bind(&input.name)
        .bind(&input.date)
        .bind(&input.event_type)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row)
    }

    /// All event rows in storage order. No ordering guarantee beyond
    /// stable enumeration.
    pub async fn list_events(&self) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT e.id, e.venue, e.name, e.date, e.type AS event_type, v.name AS venue_name
            FROM event e
            JOIN venue v ON v.id = e.venue
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
