//! JSON body extractor with validation-style rejections.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use resumehub_core::error::AppError;

use crate::error::ApiError;

/// Like [`Json`], but a malformed body is answered with the standard
/// `VALIDATION_ERROR` body instead of axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::validation(format!(
                "Invalid request body: {}",
                rejection.body_text()
            ))
            .into()),
        }
    }
}
