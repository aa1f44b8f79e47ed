use crate::{
    app::{
        models::api_error::ApiError,
        util::multipart::models::{file_properties::FileProperties, multipart_form::MultipartForm},
    },
    media::errors::MediaApiError,
};

#[derive(Debug)]
pub struct UploadMediaDto {
    pub file: FileProperties,
    pub caption: String,
}

impl UploadMediaDto {
    pub fn from_form(mut form: MultipartForm) -> Result<Self, ApiError> {
        let Some(file) = form.take_file("file") else {
            return Err(MediaApiError::FileMissing.value());
        };

        Ok(Self {
            file,
            caption: form.fields.remove("caption").unwrap_or_default(),
        })
    }
}
