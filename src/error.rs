use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// HTTP-level failures. Per-section analysis errors are rendered inline by the
/// views instead of surfacing here.
#[derive(Debug)]
pub enum AppError {
    Unauthorized,
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Not signed in".to_string()),
            AppError::InternalServerError(detail) => {
                tracing::error!(%detail, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Html(format!("<p class=\"error\">{}</p>", message));
        (status, body).into_response()
    }
}
