use crate::api::invite::interfaces::StatusResponse;
use crate::database::DbError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum InviteError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invite not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl InviteError {
    pub fn log(&self) {
        match self {
            Self::Database(e) => warn!("Database query failed: {}", e),
            Self::NotFound(id) => warn!("Invite not found: {}", id),
            Self::BadRequest(message) => warn!("Invite -> Bad Request: {}", message),
        }
    }

    /// The message sent to clients. Database details stay in the logs.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Database(_) => "A database error occurred.".to_owned(),
            Self::NotFound(_) | Self::BadRequest(_) => self.to_string(),
        }
    }
}

/// Write failures. Every error is a 400 with a `{ err, status: false }` body.
impl IntoResponse for InviteError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(StatusResponse::failed(self.client_message()));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl From<DbError> for InviteError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Sqlx(sql_err) => Self::Database(sql_err),
        }
    }
}

impl From<JsonRejection> for InviteError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
