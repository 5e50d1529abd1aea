use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use display_prayer::PrayerError;
use display_theme::ThemeError;
use serde_json::json;
use std::fmt;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        }));

        (self.status, body).into_response()
    }
}

impl From<ThemeError> for ApiError {
    fn from(err: ThemeError) -> Self {
        log::error!("theming failed: {err}");
        match &err {
            ThemeError::CatalogRead { source, .. } => Self::internal(format!("{err}: {source}")),
            _ => Self::internal(err.to_string()),
        }
    }
}

impl From<PrayerError> for ApiError {
    fn from(err: PrayerError) -> Self {
        log::error!("prayer times unavailable: {err}");
        Self::internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        log::error!("theming task failed: {err}");
        Self::internal("theming task failed")
    }
}
