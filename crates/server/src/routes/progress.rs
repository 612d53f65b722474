use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;
use vigor_domain::ProgressService;

use crate::{
    App,
    error::AppError,
    payload::{NewProgressPayload, ProgressPayload},
};

pub struct ProgressRoutes;

impl ProgressRoutes {
    pub fn routes(app: App) -> Router {
        Router::new()
            .route("/progress", get(Self::list).post(Self::create))
            .route("/progress/workout/:workout_id", get(Self::by_workout))
            .with_state(app)
    }

    async fn list(State(app): State<App>) -> Result<Json<Vec<ProgressPayload>>, AppError> {
        Ok(Json(
            app.get_progress()
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        ))
    }

    async fn by_workout(
        State(app): State<App>,
        Path(workout_id): Path<Uuid>,
    ) -> Result<Json<Vec<ProgressPayload>>, AppError> {
        Ok(Json(
            app.get_progress_by_workout(workout_id.into())
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        ))
    }

    async fn create(
        State(app): State<App>,
        payload: Result<Json<NewProgressPayload>, JsonRejection>,
    ) -> Result<(StatusCode, Json<ProgressPayload>), AppError> {
        let Json(payload) =
            payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        let record = app.create_progress(payload.into()).await?;

        Ok((StatusCode::CREATED, Json(record.into())))
    }
}
