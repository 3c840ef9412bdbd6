use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::scan::errors::ScanError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ScanError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ScanError::ImageEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "scan.image_empty",
            ),
            ScanError::ImageInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "scan.image_invalid",
            ),
            ScanError::InProgress => (StatusCode::CONFLICT, "Conflict", "scan.in_progress"),
            ScanError::SessionEnded => (StatusCode::CONFLICT, "Conflict", "scan.session_ended"),
            // Callers get one notice for both; the cause is already logged.
            ScanError::Provider { .. } | ScanError::Parse { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ScanError",
                "scan.failed",
            ),
            ScanError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "scan.not_found"),
            ScanError::Repository(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Unavailable",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = ScanError::ImageEmpty.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "scan.image_empty");
    }

    #[test]
    fn should_collapse_provider_and_parse_failures_into_one_notice() {
        let (provider_status, provider_json) =
            ScanError::provider("HTTP 503: overloaded").into_error_response();
        let (parse_status, parse_json) =
            ScanError::parse("expected value at line 1").into_error_response();

        assert_eq!(provider_status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(parse_status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(provider_json.0.message, "scan.failed");
        assert_eq!(parse_json.0.message, "scan.failed");
        assert!(!provider_json.0.message.contains("overloaded"));
    }

    #[test]
    fn should_map_in_progress_to_conflict() {
        let (status, _) = ScanError::InProgress.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn should_map_session_ended_mid_scan_to_conflict() {
        let (status, json) = ScanError::SessionEnded.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "scan.session_ended");
    }

    #[test]
    fn should_map_store_failure_to_service_unavailable() {
        let (status, json) =
            ScanError::Repository(RepositoryError::capacity_exceeded()).into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
