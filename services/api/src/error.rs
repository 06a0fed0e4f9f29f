use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jirabt_common::error::JiraBtError;

pub struct ApiError(pub JiraBtError);

impl From<JiraBtError> for ApiError {
    fn from(err: JiraBtError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            JiraBtError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            JiraBtError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => {
                tracing::error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let resp = ApiError(JiraBtError::Validation("missing pkey".into())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_maps_to_internal_error() {
        let resp = ApiError(JiraBtError::Upstream("host down".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_maps_to_404() {
        let resp = ApiError(JiraBtError::NotFound("no task".into())).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
