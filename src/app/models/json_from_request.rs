use axum::{
    async_trait,
    body::HttpBody,
    extract::{FromRequest, Json, Multipart, Path, Query},
    http::Request,
    BoxError,
};
use axum_macros::{FromRequest, FromRequestParts};
use bytes::Bytes;

use super::api_error::ApiError;

#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct PathFromRequest<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct QueryFromRequest<T>(pub T);

/// `Multipart` has no type parameter to wrap, so the derive's `via` can't
/// be used here.
pub struct MultipartFromRequest(pub Multipart);

#[async_trait]
impl<S, B> FromRequest<S, B> for MultipartFromRequest
where
    B: HttpBody + Send + 'static,
    B::Data: Into<Bytes>,
    B::Error: Into<BoxError>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await?;
        Ok(Self(multipart))
    }
}
