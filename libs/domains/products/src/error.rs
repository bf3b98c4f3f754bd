use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::DatabaseError;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by product operations.
///
/// Only two outcomes exist on the wire: a missing identifier renders as a
/// plain-text 404, everything else as a plain-text 500. The cause is logged
/// and never returned to the caller.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("product {0} does not exist")]
    NotFound(Uuid),

    /// Path identifier that does not parse as a UUID. Renders as a 500 like
    /// any other storage fault, not as a client error.
    #[error("malformed product id '{0}'")]
    InvalidId(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::NotFound(id) => {
                tracing::info!(product_id = %id, "product not found");
                (StatusCode::NOT_FOUND, "Producto no encontrado").into_response()
            }
            ProductError::InvalidId(_) | ProductError::Database(_) => {
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

impl From<DatabaseError> for ProductError {
    fn from(err: DatabaseError) -> Self {
        ProductError::Database(err.to_string())
    }
}
