use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::app::models::api_error::ApiError;

use super::{models::post::Post, seed};

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Posts in insertion order, truncated to `limit` entries when given.
    async fn list(&self, limit: Option<usize>) -> Result<Vec<(u64, Post)>, ApiError>;
    async fn get(&self, id: u64) -> Result<Option<Post>, ApiError>;
    /// Stores `post` under the next id of the sequence and returns that id.
    async fn create(&self, post: Post) -> Result<u64, ApiError>;
}

struct PostTable {
    // ids only ever grow, so key order is insertion order
    posts: BTreeMap<u64, Post>,
    next_id: u64,
}

pub struct InMemoryPostRepository {
    table: RwLock<PostTable>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        let posts: BTreeMap<u64, Post> = posts
            .into_iter()
            .enumerate()
            .map(|(i, post)| (i as u64 + 1, post))
            .collect();
        let next_id = posts.len() as u64 + 1;

        Self {
            table: RwLock::new(PostTable { posts, next_id }),
        }
    }

    pub fn seeded() -> Self {
        Self::with_posts(seed::default_posts())
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, limit: Option<usize>) -> Result<Vec<(u64, Post)>, ApiError> {
        let table = self.table.read().await;
        let take = limit.unwrap_or(usize::MAX);

        Ok(table
            .posts
            .iter()
            .take(take)
            .map(|(id, post)| (*id, post.clone()))
            .collect())
    }

    async fn get(&self, id: u64) -> Result<Option<Post>, ApiError> {
        Ok(self.table.read().await.posts.get(&id).cloned())
    }

    async fn create(&self, post: Post) -> Result<u64, ApiError> {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;
        table.posts.insert(id, post);

        tracing::debug!(id, "created post");

        Ok(id)
    }
}
