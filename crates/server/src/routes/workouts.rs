use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;
use uuid::Uuid;
use vigor_domain::{self as domain, WorkoutService};

use crate::{App, error::AppError, payload::WorkoutPayload};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct WorkoutQuery {
    search: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
    min_duration: Option<u32>,
    max_duration: Option<u32>,
}

impl WorkoutQuery {
    fn into_filter(self) -> Result<domain::WorkoutFilter, AppError> {
        Ok(domain::WorkoutFilter {
            search: self.search.unwrap_or_default(),
            category: self
                .category
                .as_deref()
                .map(domain::Category::try_from)
                .transpose()?,
            difficulty: self
                .difficulty
                .as_deref()
                .map(domain::Difficulty::try_from)
                .transpose()?,
            min_duration: self.min_duration,
            max_duration: self.max_duration,
        })
    }
}

pub struct WorkoutRoutes;

impl WorkoutRoutes {
    pub fn routes(app: App) -> Router {
        Router::new()
            .route("/workouts", get(Self::list))
            .route("/workouts/:id", get(Self::by_id))
            .route("/workouts/category/:category", get(Self::by_category))
            .with_state(app)
    }

    async fn list(
        State(app): State<App>,
        Query(query): Query<WorkoutQuery>,
    ) -> Result<Json<Vec<WorkoutPayload>>, AppError> {
        let filter = query.into_filter()?;
        let workouts = app.get_workouts().await?;

        Ok(Json(
            filter
                .apply(workouts.iter())
                .into_iter()
                .cloned()
                .map(Into::into)
                .collect(),
        ))
    }

    async fn by_id(
        State(app): State<App>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<WorkoutPayload>, AppError> {
        app.get_workout(id.into())
            .await?
            .map(|workout| Json(workout.into()))
            .ok_or(AppError::NotFound("workout"))
    }

    async fn by_category(
        State(app): State<App>,
        Path(category): Path<String>,
    ) -> Result<Json<Vec<WorkoutPayload>>, AppError> {
        let Ok(category) = domain::Category::try_from(category.as_str()) else {
            return Ok(Json(Vec::new()));
        };

        Ok(Json(
            app.get_workouts_by_category(category)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        ))
    }
}
