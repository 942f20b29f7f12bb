use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::errors::{AppErrorHttp, ServiceError};

/// `Path` whose rejection uses the JSON error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePath<T>(pub T);

impl<T, S> FromRequestParts<S> for SimplePath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;

        Ok(SimplePath(value))
    }
}
