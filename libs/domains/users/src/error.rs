use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::DatabaseError;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by user operations.
///
/// Only two outcomes exist on the wire: a missing identifier renders as a
/// plain-text 404, everything else as a plain-text 500. The cause is logged
/// and never returned to the caller.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user {0} does not exist")]
    NotFound(Uuid),

    /// Path identifier that does not parse as a UUID. Renders as a 500 like
    /// any other storage fault, not as a client error.
    #[error("malformed user id '{0}'")]
    InvalidId(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            UserError::NotFound(id) => {
                tracing::info!(user_id = %id, "user not found");
                (StatusCode::NOT_FOUND, "Usuario no encontrado").into_response()
            }
            UserError::InvalidId(_) | UserError::Database(_) => {
                tracing::error!("storage failure: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor",
                )
                    .into_response()
            }
        }
    }
}

impl From<DatabaseError> for UserError {
    fn from(err: DatabaseError) -> Self {
        UserError::Database(err.to_string())
    }
}
