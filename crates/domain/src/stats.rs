use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait StatsRepository {
    async fn read_stats(&self) -> Result<Option<UserStats>, ReadError>;
    async fn update_stats(&self, patch: StatsPatch) -> Result<UserStats, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait StatsService {
    async fn get_stats(&self) -> Result<Option<UserStats>, ReadError>;
    async fn update_stats(&self, patch: StatsPatch) -> Result<UserStats, UpdateError>;
}

/// Aggregate activity counters.
///
/// A single record per store. The counters are updated through explicit
/// patches and are not derived from the progress history.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub id: StatsID,
    pub total_workouts: u32,
    pub current_streak: u32,
    pub weekly_goal: u32,
    pub weekly_progress: u32,
    pub last_workout_date: Option<DateTime<Utc>>,
}

impl UserStats {
    #[must_use]
    pub fn new(id: StatsID) -> Self {
        Self {
            id,
            total_workouts: 0,
            current_streak: 0,
            weekly_goal: 3,
            weekly_progress: 0,
            last_workout_date: None,
        }
    }

    /// Overlay the fields present in `patch` onto `self`.
    #[must_use]
    pub fn merged(mut self, patch: StatsPatch) -> Self {
        if let Some(total_workouts) = patch.total_workouts {
            self.total_workouts = total_workouts;
        }
        if let Some(current_streak) = patch.current_streak {
            self.current_streak = current_streak;
        }
        if let Some(weekly_goal) = patch.weekly_goal {
            self.weekly_goal = weekly_goal;
        }
        if let Some(weekly_progress) = patch.weekly_progress {
            self.weekly_progress = weekly_progress;
        }
        if let Some(last_workout_date) = patch.last_workout_date {
            self.last_workout_date = Some(last_workout_date);
        }
        self
    }
}

/// The updatable fields of [`UserStats`], each optional.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatsPatch {
    pub total_workouts: Option<u32>,
    pub current_streak: Option<u32>,
    pub weekly_goal: Option<u32>,
    pub weekly_progress: Option<u32>,
    pub last_workout_date: Option<DateTime<Utc>>,
}

#[derive(Deref, Debug, Default, Display, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct StatsID(Uuid);

impl StatsID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for StatsID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for StatsID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
