use axum::extract::Multipart;
use mime::Mime;

use crate::app::models::api_error::ApiError;

use super::models::{file_properties::FileProperties, multipart_form::MultipartForm};

/// Splits a multipart body into file parts (those carrying a filename)
/// and plain text fields.
pub async fn get_multipart_form(mut multipart: Multipart) -> Result<MultipartForm, ApiError> {
    let mut form = MultipartForm::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("file").to_string();

        let Some(file_name) = field.file_name().map(|name| name.to_string()) else {
            let text = field.text().await?;
            form.fields.insert(field_name, text);
            continue;
        };

        let mime_type = field
            .content_type()
            .and_then(|content_type| content_type.parse::<Mime>().ok())
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);
        let data = field.bytes().await?;

        form.files.push(FileProperties {
            field_name,
            file_name,
            mime_type,
            data,
        });
    }

    Ok(form)
}
