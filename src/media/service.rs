use axum::http::StatusCode;

use crate::app::{models::api_error::ApiError, util::temp_file::write_temp_file};

use super::{
    dtos::upload_media_dto::UploadMediaDto,
    enums::file_type::FileType,
    errors::MediaApiError,
    host::MediaHost,
    models::{
        feed_response::FeedResponse,
        media_post::{MediaPost, NewMediaPost},
    },
    repository::MediaPostRepository,
};

/// Stages the upload in a temporary file, hands it to the media host and
/// records it once the host accepted it. The temporary file is removed when
/// this function returns, whatever the outcome.
pub async fn upload_media(
    dto: UploadMediaDto,
    repo: &dyn MediaPostRepository,
    host: &dyn MediaHost,
) -> Result<MediaPost, ApiError> {
    let temp_file = write_temp_file(&dto.file.data, &dto.file.file_name).await?;

    let result = host.upload(temp_file.path(), &dto.file.file_name).await?;
    let file_type = FileType::from_mime(&dto.file.mime_type);

    if result.status_code != StatusCode::OK {
        tracing::error!(status = result.status_code.as_u16(), message = ?result.message, "upload rejected");
        return Err(MediaApiError::UploadRejected {
            status_code: result.status_code,
            message: result.message,
        }
        .value());
    }

    let Some(url) = result.url else {
        return Err(MediaApiError::UploadUrlMissing.value());
    };

    let media_post = NewMediaPost {
        caption: dto.caption,
        url,
        file_type: file_type.value(),
        file_name: result.name.unwrap_or(dto.file.file_name),
    };

    repo.insert(media_post).await
}

pub async fn get_feed(repo: &dyn MediaPostRepository) -> Result<FeedResponse, ApiError> {
    let posts = repo.list_newest_first().await?;
    Ok(FeedResponse { posts })
}
