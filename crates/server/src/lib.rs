#![warn(clippy::pedantic)]

pub mod error;
pub mod payload;
pub mod routes;

use std::sync::Arc;

use vigor_domain::Service;
use vigor_storage::Memory;

/// Shared handler state: the application service over the process-wide
/// in-memory store.
pub type App = Arc<Service<Memory>>;

#[must_use]
pub fn router(app: App) -> axum::Router {
    routes::router(app)
}
