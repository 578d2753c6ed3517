use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use crate::data::models::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidLevel(_) => StatusCode::NOT_FOUND,
            AppError::NoActiveSession(_) => StatusCode::CONFLICT,
            AppError::SessionError(_) | AppError::RenderError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
