use serde::{Deserialize, Serialize};

use crate::posts::dtos::create_post_dto::CreatePostDto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(dto: &CreatePostDto) -> Self {
        Self {
            title: dto.title.to_string(),
            content: dto.content.to_string(),
        }
    }
}
