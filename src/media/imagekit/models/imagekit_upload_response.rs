use serde::Deserialize;

/// Body of an ImageKit upload response. Successful uploads fill the file
/// fields; rejected ones only carry `message`.
#[derive(Debug, Default, Deserialize)]
pub struct ImageKitUploadResponse {
    #[serde(rename(deserialize = "fileId"))]
    pub file_id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub message: Option<String>,
}
