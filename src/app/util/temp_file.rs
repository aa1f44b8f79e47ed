use std::path::Path;

use axum::http::StatusCode;
use tempfile::NamedTempFile;

use crate::app::models::api_error::ApiError;

/// Writes `data` to a fresh temporary file that keeps the extension of
/// `original_name`. The file is deleted when the returned guard drops.
pub async fn write_temp_file(data: &[u8], original_name: &str) -> Result<NamedTempFile, ApiError> {
    let suffix = match Path::new(original_name).extension() {
        Some(ext) => [".", &ext.to_string_lossy()].concat(),
        None => String::new(),
    };

    let temp_file = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(&suffix)
        .tempfile()
        .map_err(|e| {
            tracing::error!(%e);
            ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            }
        })?;

    if let Err(e) = tokio::fs::write(temp_file.path(), data).await {
        tracing::error!(%e);
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: e.to_string(),
        });
    }

    Ok(temp_file)
}
