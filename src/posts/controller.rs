use axum::{extract::State, Json};

use crate::{
    app::models::{
        api_error::ApiError,
        json_from_request::{JsonFromRequest, PathFromRequest, QueryFromRequest},
    },
    AppState,
};

use super::{
    dtos::{create_post_dto::CreatePostDto, get_posts_filter_dto::GetPostsFilterDto},
    models::{post::Post, posts_response::PostsResponse},
    service,
};

pub async fn get_posts(
    State(state): State<AppState>,
    QueryFromRequest(dto): QueryFromRequest<GetPostsFilterDto>,
) -> Result<Json<PostsResponse>, ApiError> {
    match service::get_posts(&dto, state.posts.as_ref()).await {
        Ok(posts) => Ok(Json(posts)),
        Err(e) => Err(e),
    }
}

pub async fn get_post_by_id(
    State(state): State<AppState>,
    PathFromRequest(id): PathFromRequest<i64>,
) -> Result<Json<Post>, ApiError> {
    match service::get_post_by_id(id, state.posts.as_ref()).await {
        Ok(post) => Ok(Json(post)),
        Err(e) => Err(e),
    }
}

pub async fn create_post(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<CreatePostDto>,
) -> Result<Json<Post>, ApiError> {
    match service::create_post(&dto, state.posts.as_ref()).await {
        Ok((_, post)) => Ok(Json(post)),
        Err(e) => Err(e),
    }
}
