//! Request extractors that reject with [`AppError`].
//!
//! axum's own `Json`, `Query`, `Path` and `Multipart` answer malformed input with a plain
//! text body (and sometimes 415 or 422). These wrappers run the same
//! extraction and turn the rejection into a 400 `{error, code}` body.

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Multipart, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

/// Query string parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(value))
    }
}

/// Path segments.
#[derive(Debug, Clone, Copy)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(PathParam(value))
    }
}

/// `multipart/form-data` body.
pub struct MultipartForm(pub Multipart);

impl<S> FromRequest<S> for MultipartForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Ok(MultipartForm(Multipart::from_request(req, state).await?))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::body::Body;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Scope {
        project_id: Option<i64>,
    }

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    fn parts(uri: &str) -> Parts {
        let (parts, ()) = axum::http::Request::builder()
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[tokio::test]
    async fn query_parses_and_rejects() {
        let QueryParams(scope) =
            QueryParams::<Scope>::from_request_parts(&mut parts("/x?projectId=7"), &())
                .await
                .unwrap();
        assert_eq!(scope.project_id, Some(7));

        let err = QueryParams::<Scope>::from_request_parts(&mut parts("/x?projectId=abc"), &())
            .await
            .unwrap_err();
        assert_matches!(err, AppError::BadRequest(msg) if msg.contains("projectId"));
    }

    #[tokio::test]
    async fn json_rejections_become_bad_requests() {
        let request = |body: &'static str, content_type: Option<&'static str>| {
            let mut builder = axum::http::Request::builder().method("POST").uri("/x");
            if let Some(content_type) = content_type {
                builder = builder.header("content-type", content_type);
            }
            builder.body(Body::from(body)).unwrap()
        };

        let JsonBody(named) = JsonBody::<Named>::from_request(
            request(r#"{"name":"Launch"}"#, Some("application/json")),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(named.name, "Launch");

        for req in [
            request(r#"{"name":5}"#, Some("application/json")),
            request("{not json", Some("application/json")),
            request(r#"{"name":"Launch"}"#, None),
        ] {
            let err = JsonBody::<Named>::from_request(req, &()).await.unwrap_err();
            assert_matches!(err, AppError::BadRequest(_));
        }
    }
}
