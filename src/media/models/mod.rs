pub mod feed_response;
pub mod media_post;
pub mod upload_result;
