//! HTTP routes, one module per resource. Each module contains the route
//! definitions and thin handlers that delegate to the service layer.

pub mod exercises;
pub mod health;
pub mod preferences;
pub mod progress;
pub mod stats;
pub mod workouts;

pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use preferences::PreferenceRoutes;
pub use progress::ProgressRoutes;
pub use stats::StatsRoutes;
pub use workouts::WorkoutRoutes;

use axum::Router;

use crate::App;

#[must_use]
pub fn router(app: App) -> Router {
    Router::new().nest(
        "/api",
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(ExerciseRoutes::routes(app.clone()))
            .merge(WorkoutRoutes::routes(app.clone()))
            .merge(ProgressRoutes::routes(app.clone()))
            .merge(StatsRoutes::routes(app.clone()))
            .merge(PreferenceRoutes::routes(app)),
    )
}
