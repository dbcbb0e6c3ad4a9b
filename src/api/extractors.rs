use crate::common::error::AppError;
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use tracing::debug;

/// `Query` that rejects with `AppError::DecodingRequestFailed`.
pub struct ApiQuery<T>(pub T);

/// `Path` that rejects with `AppError::DecodingRequestFailed`.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(e) => {
                debug!(uri = %parts.uri, "Rejected query: {e}");
                Err(AppError::DecodingRequestFailed)
            }
        }
    }
}

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(e) => {
                debug!(uri = %parts.uri, "Rejected path: {e}");
                Err(AppError::DecodingRequestFailed)
            }
        }
    }
}
