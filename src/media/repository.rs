use async_trait::async_trait;
use axum::http::StatusCode;
use sqlx::PgPool;

use crate::app::models::api_error::ApiError;

use super::models::media_post::{MediaPost, NewMediaPost};

#[async_trait]
pub trait MediaPostRepository: Send + Sync {
    async fn insert(&self, media_post: NewMediaPost) -> Result<MediaPost, ApiError>;
    async fn list_newest_first(&self) -> Result<Vec<MediaPost>, ApiError>;
}

pub struct PgMediaPostRepository {
    pool: PgPool,
}

impl PgMediaPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> ApiError {
    tracing::error!(%e);
    ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message: e.to_string(),
    }
}

#[async_trait]
impl MediaPostRepository for PgMediaPostRepository {
    async fn insert(&self, media_post: NewMediaPost) -> Result<MediaPost, ApiError> {
        let sqlx_result = sqlx::query_as::<_, MediaPost>(
            "
            INSERT INTO media_posts (
                caption, url, file_type, file_name
            )
            VALUES ($1, $2, $3, $4)
            RETURNING id, caption, url, file_type, file_name, created_at
            ",
        )
        .bind(&media_post.caption)
        .bind(&media_post.url)
        .bind(&media_post.file_type)
        .bind(&media_post.file_name)
        .fetch_one(&self.pool)
        .await;

        match sqlx_result {
            Ok(media_post) => Ok(media_post),
            Err(e) => Err(database_error(e)),
        }
    }

    async fn list_newest_first(&self) -> Result<Vec<MediaPost>, ApiError> {
        let sqlx_result = sqlx::query_as::<_, MediaPost>(
            "
            SELECT id, caption, url, file_type, file_name, created_at
            FROM media_posts
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await;

        match sqlx_result {
            Ok(media_posts) => Ok(media_posts),
            Err(e) => Err(database_error(e)),
        }
    }
}

#[cfg(test)]
pub use in_memory::InMemoryMediaPostRepository;
