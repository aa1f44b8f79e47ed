use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(50)
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(database_url)
        .await
}

/// Creates the tables the service writes to when they are missing.
/// There is no migration history; the schema is a single table.
pub async fn create_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "
        CREATE TABLE IF NOT EXISTS media_posts (
            id BIGSERIAL PRIMARY KEY,
            caption TEXT NOT NULL DEFAULT '',
            url TEXT NOT NULL,
            file_type TEXT NOT NULL,
            file_name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "
        CREATE INDEX IF NOT EXISTS media_posts_created_at_idx
        ON media_posts (created_at DESC)
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
