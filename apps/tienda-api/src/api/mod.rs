//! API routes module

pub mod health;
pub mod productos;
pub mod usuarios;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/productos", productos::router(state))
        .nest("/usuarios", usuarios::router(state))
        .merge(health::router(state.clone()))
}
