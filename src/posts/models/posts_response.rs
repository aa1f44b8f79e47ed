use std::collections::BTreeMap;

use serde::Serialize;

use super::post::Post;

/// `GET /posts` answers with the whole store keyed by id, or with a plain
/// list once a limit is applied.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PostsResponse {
    All(BTreeMap<u64, Post>),
    Limited(Vec<Post>),
}
