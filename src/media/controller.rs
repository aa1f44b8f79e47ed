use axum::{extract::State, Json};

use crate::{
    app::{
        models::{api_error::ApiError, json_from_request::MultipartFromRequest},
        util::multipart::multipart::get_multipart_form,
    },
    AppState,
};

use super::{
    dtos::upload_media_dto::UploadMediaDto,
    models::{feed_response::FeedResponse, media_post::MediaPost},
    service,
};

pub async fn upload_media(
    State(state): State<AppState>,
    MultipartFromRequest(multipart): MultipartFromRequest,
) -> Result<Json<MediaPost>, ApiError> {
    let form = get_multipart_form(multipart).await?;
    let dto = UploadMediaDto::from_form(form)?;

    match service::upload_media(dto, state.media_posts.as_ref(), state.media_host.as_ref()).await
    {
        Ok(media_post) => Ok(Json(media_post)),
        Err(e) => Err(e),
    }
}

pub async fn get_feed(State(state): State<AppState>) -> Result<Json<FeedResponse>, ApiError> {
    match service::get_feed(state.media_posts.as_ref()).await {
        Ok(feed) => Ok(Json(feed)),
        Err(e) => Err(e),
    }
}
