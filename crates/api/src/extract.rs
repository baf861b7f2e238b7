//! Request extractors whose rejections use the standard error body.

use axum::extract::{FromRequest, Multipart, Request};

use crate::error::AppError;

/// `axum::Json` with rejections (bad syntax, wrong content type, oversized
/// body) reported as `BAD_REQUEST` JSON errors instead of plain text.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Multipart` whose rejections (wrong content type, missing
/// boundary) surface as `MALFORMED_UPLOAD`.
pub struct MultipartBody(pub Multipart);

impl<S> FromRequest<S> for MultipartBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(req, state).await?;
        Ok(Self(multipart))
    }
}
