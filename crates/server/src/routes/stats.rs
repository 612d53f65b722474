use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use vigor_domain::StatsService;

use crate::{
    App,
    error::AppError,
    payload::{StatsPatchPayload, StatsPayload},
};

pub struct StatsRoutes;

impl StatsRoutes {
    pub fn routes(app: App) -> Router {
        Router::new()
            .route("/stats", get(Self::get).put(Self::update))
            .with_state(app)
    }

    async fn get(State(app): State<App>) -> Result<Json<StatsPayload>, AppError> {
        app.get_stats()
            .await?
            .map(|stats| Json(stats.into()))
            .ok_or(AppError::NotFound("stats"))
    }

    async fn update(
        State(app): State<App>,
        payload: Result<Json<StatsPatchPayload>, JsonRejection>,
    ) -> Result<Json<StatsPayload>, AppError> {
        let Json(payload) =
            payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        let stats = app.update_stats(payload.into()).await?;

        Ok(Json(stats.into()))
    }
}
