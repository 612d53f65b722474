use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use vigor_domain::{self as domain, PreferencesService};

use crate::{
    App,
    error::AppError,
    payload::{PreferencesPatchPayload, PreferencesPayload},
};

pub struct PreferenceRoutes;

impl PreferenceRoutes {
    pub fn routes(app: App) -> Router {
        Router::new()
            .route("/preferences", get(Self::get).put(Self::update))
            .with_state(app)
    }

    async fn get(State(app): State<App>) -> Result<Json<PreferencesPayload>, AppError> {
        app.get_preferences()
            .await?
            .map(|preferences| Json(preferences.into()))
            .ok_or(AppError::NotFound("preferences"))
    }

    async fn update(
        State(app): State<App>,
        payload: Result<Json<PreferencesPatchPayload>, JsonRejection>,
    ) -> Result<Json<PreferencesPayload>, AppError> {
        let Json(payload) =
            payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        let patch = domain::PreferencesPatch::try_from(payload)?;
        let preferences = app.update_preferences(patch).await?;

        Ok(Json(preferences.into()))
    }
}
