use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    response::Response,
};
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    app::models::api_error::ApiError,
    media::{
        host::MediaHost, models::upload_result::UploadResult,
        repository::InMemoryMediaPostRepository,
    },
    posts::repository::InMemoryPostRepository,
    AppState,
};

pub const BOUNDARY: &str = "media-feed-test-boundary";

#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub data: Vec<u8>,
}

enum Outcome {
    Answer {
        status_code: StatusCode,
        with_name: bool,
        with_url: bool,
        message: Option<String>,
    },
    Fail(String),
}

/// Media host double that reads the staged file while it still exists and
/// answers with a canned outcome.
pub struct FakeMediaHost {
    outcome: Outcome,
    uploads: Mutex<Vec<RecordedUpload>>,
}

impl FakeMediaHost {
    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::with(Outcome::Answer {
            status_code: StatusCode::OK,
            with_name: true,
            with_url: true,
            message: None,
        })
    }

    pub fn accepting_without_name() -> Self {
        Self::with(Outcome::Answer {
            status_code: StatusCode::OK,
            with_name: false,
            with_url: true,
            message: None,
        })
    }

    pub fn accepting_without_url() -> Self {
        Self::with(Outcome::Answer {
            status_code: StatusCode::OK,
            with_name: true,
            with_url: false,
            message: None,
        })
    }

    pub fn rejecting(status_code: StatusCode, message: Option<&str>) -> Self {
        Self::with(Outcome::Answer {
            status_code,
            with_name: false,
            with_url: false,
            message: message.map(|m| m.to_string()),
        })
    }

    pub fn failing(message: &str) -> Self {
        Self::with(Outcome::Fail(message.to_string()))
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaHost for FakeMediaHost {
    async fn upload(&self, path: &Path, file_name: &str) -> Result<UploadResult, ApiError> {
        let data = std::fs::read(path).unwrap();
        self.uploads.lock().unwrap().push(RecordedUpload {
            path: path.to_path_buf(),
            file_name: file_name.to_string(),
            data,
        });

        match &self.outcome {
            Outcome::Answer {
                status_code,
                with_name,
                with_url,
                message,
            } => {
                let name = format!("unique_{}", file_name);
                Ok(UploadResult {
                    status_code: *status_code,
                    url: with_url.then(|| format!("https://media.test/{}", name)),
                    name: with_name.then(|| name),
                    message: message.clone(),
                })
            }
            Outcome::Fail(message) => Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.to_string(),
            }),
        }
    }
}

pub fn test_state() -> (
    AppState,
    Arc<InMemoryMediaPostRepository>,
    Arc<FakeMediaHost>,
) {
    test_state_with_host(FakeMediaHost::accepting())
}

pub fn test_state_with_host(
    host: FakeMediaHost,
) -> (
    AppState,
    Arc<InMemoryMediaPostRepository>,
    Arc<FakeMediaHost>,
) {
    let media_posts = Arc::new(InMemoryMediaPostRepository::default());
    let media_host = Arc::new(host);

    let state = AppState {
        posts: Arc::new(InMemoryPostRepository::seeded()),
        media_posts: media_posts.clone(),
        media_host: media_host.clone(),
    };

    (state, media_posts, media_host)
}

/// Builds a `POST /upload` request. `file` is `(file name, content type, bytes)`.
pub fn upload_request(file: Option<(&str, &str, &[u8])>, caption: Option<&str>) -> Request<Body> {
    let mut body = Vec::new();

    if let Some(caption) = caption {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"caption\"\r\n\r\n{}\r\n",
                BOUNDARY, caption
            )
            .as_bytes(),
        );
    }

    if let Some((file_name, content_type, data)) = file {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                BOUNDARY, file_name, content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

static SCHEMA_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A throwaway Postgres schema for tests that need the real SQL. The pool
/// holds a single connection so `search_path` sticks to every query.
pub struct TestDatabase {
    pub pool: PgPool,
    schema: String,
}

impl TestDatabase {
    /// `None` when `DATABASE_URL` is unset, so those tests pass vacuously.
    pub async fn from_env() -> Option<Self> {
        let database_url = std::env::var("DATABASE_URL").ok()?;

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .unwrap();

        let schema = format!(
            "media_feed_test_{}_{}",
            std::process::id(),
            SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst)
        );
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", schema))
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(&format!("SET search_path TO {}", schema))
            .execute(&pool)
            .await
            .unwrap();

        Some(Self { pool, schema })
    }

    pub async fn cleanup(self) {
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
            .execute(&self.pool)
            .await
            .unwrap();
        self.pool.close().await;
    }
}
