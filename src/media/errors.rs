use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum MediaApiError {
    FileMissing,
    UploadRejected {
        status_code: StatusCode,
        message: Option<String>,
    },
    UploadUrlMissing,
}

impl MediaApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::FileMissing => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "A file must be provided in the `file` field.".to_string(),
            },
            Self::UploadRejected {
                status_code,
                message,
            } => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: match message {
                    Some(message) => message.to_string(),
                    None => format!("Upload failed with status {}.", status_code.as_u16()),
                },
            },
            Self::UploadUrlMissing => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Upload response did not include a url.".to_string(),
            },
        }
    }
}
