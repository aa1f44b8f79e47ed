use std::path::Path;

use async_trait::async_trait;

use crate::app::models::api_error::ApiError;

use super::models::upload_result::UploadResult;

/// Hosted image/video storage. Implementations report the host's status
/// code in the result; transport and I/O failures come back as `Err`.
#[async_trait]
pub trait MediaHost: Send + Sync {
    async fn upload(&self, path: &Path, file_name: &str) -> Result<UploadResult, ApiError>;
}
