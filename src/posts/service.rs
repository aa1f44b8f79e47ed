use crate::app::models::api_error::ApiError;

use super::{
    dtos::{create_post_dto::CreatePostDto, get_posts_filter_dto::GetPostsFilterDto},
    errors::PostsApiError,
    models::{post::Post, posts_response::PostsResponse},
    repository::PostRepository,
};

pub async fn get_posts(
    dto: &GetPostsFilterDto,
    repo: &dyn PostRepository,
) -> Result<PostsResponse, ApiError> {
    match dto.limit.filter(|limit| *limit > 0) {
        Some(limit) => {
            let posts = repo.list(Some(limit as usize)).await?;
            Ok(PostsResponse::Limited(
                posts.into_iter().map(|(_, post)| post).collect(),
            ))
        }
        None => {
            let posts = repo.list(None).await?;
            Ok(PostsResponse::All(posts.into_iter().collect()))
        }
    }
}

pub async fn get_post_by_id(id: i64, repo: &dyn PostRepository) -> Result<Post, ApiError> {
    // ids start at 1, anything below can never have been stored
    let Ok(id) = u64::try_from(id) else {
        return Err(PostsApiError::PostNotFound.value());
    };

    match repo.get(id).await? {
        Some(post) => Ok(post),
        None => Err(PostsApiError::PostNotFound.value()),
    }
}

pub async fn create_post(
    dto: &CreatePostDto,
    repo: &dyn PostRepository,
) -> Result<(u64, Post), ApiError> {
    let post = Post::new(dto);
    let id = repo.create(post.clone()).await?;

    Ok((id, post))
}
