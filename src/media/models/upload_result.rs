use axum::http::StatusCode;

/// What the media host answered for a single upload.
#[derive(Debug, Clone)]
pub struct UploadResult {
    pub status_code: StatusCode,
    pub url: Option<String>,
    pub name: Option<String>,
    pub message: Option<String>,
}
