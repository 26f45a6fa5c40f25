use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use tracing::warn;

use crate::error::AppError;

/// `Json` whose rejection is reported as `AppError::InvalidInput`.
pub struct ValidJson<T>(pub T);

/// `Path` whose rejection is reported as `AppError::InvalidInput`.
pub struct ValidPath<T>(pub T);

/// `Query` whose rejection is reported as `AppError::InvalidInput`.
pub struct ValidQuery<T>(pub T);

fn json_message(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::JsonDataError(_) => "request body has a missing or mistyped field",
        JsonRejection::JsonSyntaxError(_) => "request body is not valid JSON",
        JsonRejection::MissingJsonContentType(_) => {
            "request body must be sent as `Content-Type: application/json`"
        }
        _ => "request body could not be read",
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "json body rejected");
                Err(AppError::InvalidInput(json_message(&rejection).into()))
            }
        }
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "path rejected");
                Err(AppError::InvalidInput(
                    "path parameter is missing or has the wrong type".into(),
                ))
            }
        }
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!(error = %rejection.body_text(), "query string rejected");
                Err(AppError::InvalidInput("query parameter has the wrong type".into()))
            }
        }
    }
}
