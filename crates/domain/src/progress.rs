use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{CreateError, ExerciseID, ReadError, WorkoutID};

#[allow(async_fn_in_trait)]
pub trait ProgressRepository {
    async fn read_progress(&self) -> Result<Vec<ProgressRecord>, ReadError>;
    async fn read_progress_by_workout(
        &self,
        workout_id: WorkoutID,
    ) -> Result<Vec<ProgressRecord>, ReadError>;
    async fn create_progress(&self, progress: NewProgress) -> Result<ProgressRecord, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait ProgressService {
    async fn get_progress(&self) -> Result<Vec<ProgressRecord>, ReadError>;
    async fn get_progress_by_workout(
        &self,
        workout_id: WorkoutID,
    ) -> Result<Vec<ProgressRecord>, ReadError>;
    async fn create_progress(&self, progress: NewProgress) -> Result<ProgressRecord, CreateError>;
}

/// One completed set.
///
/// Records are append-only. The stored history is the source of truth
/// for past activity; nothing updates or deletes a record once written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    pub id: ProgressID,
    pub workout_id: WorkoutID,
    pub exercise_id: ExerciseID,
    pub completed_at: DateTime<Utc>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight: Option<f32>,
    pub duration: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProgress {
    pub workout_id: WorkoutID,
    pub exercise_id: ExerciseID,
    pub completed_at: DateTime<Utc>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight: Option<f32>,
    pub duration: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Deref, Debug, Default, Display, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProgressID(Uuid);

impl ProgressID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ProgressID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ProgressID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
