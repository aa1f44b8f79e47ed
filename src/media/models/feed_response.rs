use serde::Serialize;

use super::media_post::MediaPost;

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub posts: Vec<MediaPost>,
}
