use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::satis::SatisError;

/// Failure outcome of a repo resource request.
///
/// Only `Internal` carries a body: the error text as plain text.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    BadRequest,
    Conflict,
    NotFound,
    Unauthorized,
    Internal(String),
}

impl ApiError {
    /// Logs `err` once and turns it into an `Internal` error.
    pub fn internal(action: &str, err: impl std::fmt::Display) -> Self {
        log::error!("Failed {}: {}", action, err);
        ApiError::Internal(err.to_string())
    }

    /// Maps a store error: unknown ids become `NotFound`, everything else is internal.
    pub fn from_store(action: &str, err: SatisError) -> Self {
        match err {
            SatisError::RepoNotFound(_) => ApiError::NotFound,
            other => ApiError::internal(action, other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST.into_response(),
            ApiError::Conflict => StatusCode::CONFLICT.into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            ApiError::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_matched_by_variant() {
        let err = ApiError::from_store("loading repo", SatisError::RepoNotFound("x".into()));
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn other_store_errors_are_internal() {
        let err = ApiError::from_store("loading repo", SatisError::ProcessorStopped);
        assert_eq!(err, ApiError::Internal("job processor stopped".to_string()));
    }

    #[test]
    fn status_codes() {
        let cases = [
            (ApiError::BadRequest, StatusCode::BAD_REQUEST),
            (ApiError::Conflict, StatusCode::CONFLICT),
            (ApiError::NotFound, StatusCode::NOT_FOUND),
            (ApiError::Unauthorized, StatusCode::UNAUTHORIZED),
            (
                ApiError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
