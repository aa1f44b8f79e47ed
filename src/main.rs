use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::Method,
    response::IntoResponse,
    routing::{get, post},
    BoxError, Router,
};
use tower::{
    buffer::BufferLayer, limit::RateLimitLayer, load_shed::error::Overloaded, ServiceBuilder,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::{
    app::{
        env::{Envy, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT},
        errors::DefaultApiError,
        util::db,
    },
    media::{
        host::MediaHost,
        imagekit::service::ImageKitHost,
        repository::{MediaPostRepository, PgMediaPostRepository},
    },
    posts::repository::{InMemoryPostRepository, PostRepository},
};

mod app;
mod media;
mod posts;

#[cfg(test)]
mod test_util;

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub media_posts: Arc<dyn MediaPostRepository>,
    pub media_host: Arc<dyn MediaHost>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(app::controller::get_root))
        // posts
        .route("/posts", get(posts::controller::get_posts))
        .route("/posts", post(posts::controller::create_post))
        .route("/posts/:id", get(posts::controller::get_post_by_id))
        // media
        .route("/upload", post(media::controller::upload_media))
        .route("/feed", get(media::controller::get_feed))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("media_feed_api=debug,tower_http=info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.unwrap_or(DEFAULT_PORT);
    let max_upload_bytes = envy.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    let pool = db::connect(&envy.database_url)
        .await
        .expect("failed to connect to database");
    db::create_schema(&pool)
        .await
        .expect("failed to create database schema");

    tracing::info!(app_env = %envy.app_env, "connected to db");

    let media_host = ImageKitHost::new(
        &envy.imagekit_private_key,
        envy.imagekit_upload_url.as_deref(),
        envy.imagekit_upload_tag.as_deref(),
    );

    let state = AppState {
        posts: Arc::new(InMemoryPostRepository::seeded()),
        media_posts: Arc::new(PgMediaPostRepository::new(pool)),
        media_host: Arc::new(media_host),
    };

    // app
    let app = create_router(state)
        // layers
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err);
                    if err.is::<Overloaded>() {
                        DefaultApiError::Overloaded.value().into_response()
                    } else {
                        DefaultApiError::InternalServerError
                            .value()
                            .into_response()
                    }
                }))
                .load_shed()
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(50, Duration::from_secs(1))),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
