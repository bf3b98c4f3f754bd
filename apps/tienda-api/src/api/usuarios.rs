//! User API routes
//!
//! This module wires up the users domain to HTTP routes.

use axum::Router;
use domain_users::{handlers, MongoUserRepository, UserService};

use crate::state::AppState;

/// Create users router
pub fn router(state: &AppState) -> Router {
    let repository = MongoUserRepository::new(&state.db);
    let service = UserService::new(repository);
    handlers::router(service)
}
