use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub database_url: String,

    pub imagekit_private_key: String,
    pub imagekit_upload_url: Option<String>,
    pub imagekit_upload_tag: Option<String>,

    pub max_upload_bytes: Option<usize>,
}

fn default_app_env() -> String {
    "development".to_string()
}
