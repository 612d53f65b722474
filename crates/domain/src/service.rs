use std::collections::BTreeMap;

use log::{debug, error};

use crate::{
    Category, CreateError, Equipment, Exercise, ExerciseID, ExerciseRepository, ExerciseService,
    GuidedSession, NewExercise, NewProgress, NewWorkout, PreferencesPatch, PreferencesRepository,
    PreferencesService, ProgressRecord, ProgressRepository, ProgressService, ReadError,
    SessionService, SetCompletion, StartSessionError, StatsPatch, StatsRepository, StatsService,
    UpdateError, UserPreferences, UserStats, Workout, WorkoutID, WorkoutRepository, WorkoutService,
};

/// The application service: a thin layer over a repository that logs
/// failed operations and wires guided sessions to the progress history.
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(self.repository.read_exercises(), "read", "exercises")
    }

    async fn get_exercise(&self, id: ExerciseID) -> Result<Option<Exercise>, ReadError> {
        log_on_error!(self.repository.read_exercise(id), "read", "exercise")
    }

    async fn get_exercises_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises_by_category(category),
            "read",
            "exercises by category"
        )
    }

    async fn get_exercises_by_equipment(
        &self,
        equipment: Equipment,
    ) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises_by_equipment(equipment),
            "read",
            "exercises by equipment"
        )
    }

    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, CreateError> {
        log_on_error!(
            self.repository.create_exercise(exercise),
            "create",
            "exercise"
        )
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(self.repository.read_workouts(), "read", "workouts")
    }

    async fn get_workout(&self, id: WorkoutID) -> Result<Option<Workout>, ReadError> {
        log_on_error!(self.repository.read_workout(id), "read", "workout")
    }

    async fn get_workouts_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts_by_category(category),
            "read",
            "workouts by category"
        )
    }

    async fn create_workout(&self, workout: NewWorkout) -> Result<Workout, CreateError> {
        log_on_error!(self.repository.create_workout(workout), "create", "workout")
    }
}

impl<R: ProgressRepository> ProgressService for Service<R> {
    async fn get_progress(&self) -> Result<Vec<ProgressRecord>, ReadError> {
        log_on_error!(self.repository.read_progress(), "read", "progress")
    }

    async fn get_progress_by_workout(
        &self,
        workout_id: WorkoutID,
    ) -> Result<Vec<ProgressRecord>, ReadError> {
        log_on_error!(
            self.repository.read_progress_by_workout(workout_id),
            "read",
            "progress by workout"
        )
    }

    async fn create_progress(&self, progress: NewProgress) -> Result<ProgressRecord, CreateError> {
        log_on_error!(
            self.repository.create_progress(progress),
            "create",
            "progress"
        )
    }
}

impl<R: StatsRepository> StatsService for Service<R> {
    async fn get_stats(&self) -> Result<Option<UserStats>, ReadError> {
        log_on_error!(self.repository.read_stats(), "read", "stats")
    }

    async fn update_stats(&self, patch: StatsPatch) -> Result<UserStats, UpdateError> {
        log_on_error!(self.repository.update_stats(patch), "update", "stats")
    }
}

impl<R: PreferencesRepository> PreferencesService for Service<R> {
    async fn get_preferences(&self) -> Result<Option<UserPreferences>, ReadError> {
        log_on_error!(self.repository.read_preferences(), "read", "preferences")
    }

    async fn update_preferences(
        &self,
        patch: PreferencesPatch,
    ) -> Result<UserPreferences, UpdateError> {
        log_on_error!(
            self.repository.update_preferences(patch),
            "update",
            "preferences"
        )
    }
}

impl<R: WorkoutRepository + ExerciseRepository + ProgressRepository> SessionService for Service<R> {
    async fn start_session(
        &self,
        workout_id: WorkoutID,
    ) -> Result<GuidedSession, StartSessionError> {
        let workout = self
            .repository
            .read_workout(workout_id)
            .await?
            .ok_or(StartSessionError::UnknownWorkout(workout_id))?;
        let catalog = self
            .repository
            .read_exercises()
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect::<BTreeMap<_, _>>();

        let mut session = GuidedSession::new(&workout, &catalog)?;
        session.begin()?;
        debug!("started guided session for workout {workout_id}");

        Ok(session)
    }

    /// Persist a completed set. The session has already advanced when
    /// this is called; a failure here is reported to the caller but must
    /// not be treated as a reason to rewind the session.
    async fn record_completion(
        &self,
        completion: &SetCompletion,
    ) -> Result<ProgressRecord, CreateError> {
        log_on_error!(
            self.repository.create_progress(completion.progress.clone()),
            "record",
            "set completion"
        )
    }
}
