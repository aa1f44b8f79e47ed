use std::path::Path;

use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::{
    multipart::{Form, Part},
    Body,
};

use crate::{
    app::models::api_error::ApiError,
    media::{host::MediaHost, models::upload_result::UploadResult},
};

use super::models::imagekit_upload_response::ImageKitUploadResponse;

pub const DEFAULT_UPLOAD_URL: &str = "https://upload.imagekit.io/api/v1/files/upload";
pub const DEFAULT_UPLOAD_TAG: &str = "backend-upload";

pub struct ImageKitHost {
    client: reqwest::Client,
    private_key: String,
    upload_url: String,
    upload_tag: String,
}

impl ImageKitHost {
    pub fn new(private_key: &str, upload_url: Option<&str>, upload_tag: Option<&str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            private_key: private_key.to_string(),
            upload_url: upload_url.unwrap_or(DEFAULT_UPLOAD_URL).to_string(),
            upload_tag: upload_tag.unwrap_or(DEFAULT_UPLOAD_TAG).to_string(),
        }
    }
}

fn internal_error(message: String) -> ApiError {
    ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message,
    }
}

#[async_trait]
impl MediaHost for ImageKitHost {
    async fn upload(&self, path: &Path, file_name: &str) -> Result<UploadResult, ApiError> {
        let file = match tokio::fs::File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                tracing::error!(%e);
                return Err(internal_error(e.to_string()));
            }
        };
        let length = match file.metadata().await {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                tracing::error!(%e);
                return Err(internal_error(e.to_string()));
            }
        };

        // streamed from disk
        let part =
            Part::stream_with_length(Body::from(file), length).file_name(file_name.to_string());
        let form = Form::new()
            .part("file", part)
            .text("fileName", file_name.to_string())
            .text("useUniqueFileName", "true")
            .text("tags", self.upload_tag.to_string());

        let result = self
            .client
            .post(&self.upload_url)
            .basic_auth(&self.private_key, Some(""))
            .multipart(form)
            .send()
            .await;

        match result {
            Ok(res) => {
                let status_code = res.status();

                match res.text().await {
                    Ok(text) => {
                        let body = match serde_json::from_str::<ImageKitUploadResponse>(&text) {
                            Ok(body) => body,
                            Err(_) => {
                                tracing::error!(%text);
                                ImageKitUploadResponse::default()
                            }
                        };

                        tracing::debug!(
                            status = status_code.as_u16(),
                            file_id = ?body.file_id,
                            "imagekit upload finished"
                        );

                        Ok(UploadResult {
                            status_code,
                            url: body.url,
                            name: body.name,
                            message: body.message,
                        })
                    }
                    Err(e) => {
                        tracing::error!(%e);
                        Err(internal_error(e.to_string()))
                    }
                }
            }
            Err(e) => {
                tracing::error!(%e);
                Err(internal_error(e.to_string()))
            }
        }
    }
}
