use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;
use uuid::Uuid;
use vigor_domain::{self as domain, ExerciseService};

use crate::{App, error::AppError, payload::ExercisePayload};

/// Optional library filter criteria. Unknown enumerated values in the
/// query string are rejected; unknown values in the dedicated filter
/// path segments match nothing, like any other non-stored value.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ExerciseQuery {
    search: Option<String>,
    category: Option<String>,
    equipment: Option<String>,
    difficulty: Option<String>,
    muscle_group: Option<String>,
}

impl ExerciseQuery {
    fn into_filter(self) -> Result<domain::ExerciseFilter, AppError> {
        Ok(domain::ExerciseFilter {
            search: self.search.unwrap_or_default(),
            category: self
                .category
                .as_deref()
                .map(domain::Category::try_from)
                .transpose()?,
            equipment: self
                .equipment
                .as_deref()
                .map(domain::Equipment::try_from)
                .transpose()?,
            difficulty: self
                .difficulty
                .as_deref()
                .map(domain::Difficulty::try_from)
                .transpose()?,
            muscle_group: self.muscle_group,
        })
    }
}

pub struct ExerciseRoutes;

impl ExerciseRoutes {
    pub fn routes(app: App) -> Router {
        Router::new()
            .route("/exercises", get(Self::list))
            .route("/exercises/:id", get(Self::by_id))
            .route("/exercises/category/:category", get(Self::by_category))
            .route("/exercises/equipment/:equipment", get(Self::by_equipment))
            .with_state(app)
    }

    async fn list(
        State(app): State<App>,
        Query(query): Query<ExerciseQuery>,
    ) -> Result<Json<Vec<ExercisePayload>>, AppError> {
        let filter = query.into_filter()?;
        let exercises = app.get_exercises().await?;

        Ok(Json(
            filter
                .apply(exercises.iter())
                .into_iter()
                .cloned()
                .map(Into::into)
                .collect(),
        ))
    }

    async fn by_id(
        State(app): State<App>,
        Path(id): Path<Uuid>,
    ) -> Result<Json<ExercisePayload>, AppError> {
        app.get_exercise(id.into())
            .await?
            .map(|exercise| Json(exercise.into()))
            .ok_or(AppError::NotFound("exercise"))
    }

    async fn by_category(
        State(app): State<App>,
        Path(category): Path<String>,
    ) -> Result<Json<Vec<ExercisePayload>>, AppError> {
        let Ok(category) = domain::Category::try_from(category.as_str()) else {
            return Ok(Json(Vec::new()));
        };

        Ok(Json(
            app.get_exercises_by_category(category)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        ))
    }

    async fn by_equipment(
        State(app): State<App>,
        Path(equipment): Path<String>,
    ) -> Result<Json<Vec<ExercisePayload>>, AppError> {
        let Ok(equipment) = domain::Equipment::try_from(equipment.as_str()) else {
            return Ok(Json(Vec::new()));
        };

        Ok(Json(
            app.get_exercises_by_equipment(equipment)
                .await?
                .into_iter()
                .map(Into::into)
                .collect(),
        ))
    }
}
