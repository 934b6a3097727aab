//! Domain error to HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rolodex_core::RolodexError;
use serde::Serialize;
use tracing::error;

/// Boundary wrapper translating domain errors into HTTP responses
///
/// - `PersonNotFound` → 404 with no body (the resource contract for every
///   unresolved id, across read, update, and delete)
/// - `DuplicateEmail` → 409 with a coded JSON body
/// - anything else → 500 with a coded JSON body, logged at error level
pub struct ApiError(RolodexError);

/// JSON error body carrying the stable error code
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ErrorBody {
    fn from_error(err: &RolodexError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl From<RolodexError> for ApiError {
    fn from(err: RolodexError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            RolodexError::PersonNotFound { .. } => StatusCode::NOT_FOUND.into_response(),
            RolodexError::DuplicateEmail { .. } => {
                (StatusCode::CONFLICT, Json(ErrorBody::from_error(&self.0))).into_response()
            }
            _ => {
                error!(code = self.0.code(), error = %self.0, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody::from_error(&self.0)),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::from(RolodexError::PersonNotFound { id: 7 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_email_maps_to_409() {
        let response = ApiError::from(RolodexError::DuplicateEmail {
            email: "john@x.com".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_persistence_failure_maps_to_500() {
        let response = ApiError::from(RolodexError::Persistence {
            message: "disk full".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
