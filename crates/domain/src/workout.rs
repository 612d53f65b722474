use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{Category, CreateError, Difficulty, ExerciseID, Name, Property, ReadError};

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn read_workout(&self, id: WorkoutID) -> Result<Option<Workout>, ReadError>;
    async fn read_workouts_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: NewWorkout) -> Result<Workout, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn get_workout(&self, id: WorkoutID) -> Result<Option<Workout>, ReadError>;
    async fn get_workouts_by_category(&self, category: Category)
    -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, workout: NewWorkout) -> Result<Workout, CreateError>;
}

/// An ordered prescription of exercises.
///
/// The order of `exercises` is the order in which a guided session walks
/// through them. Entries reference the exercise catalog by identifier;
/// references are not checked at creation time and only resolve when a
/// session is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub description: Option<String>,
    pub category: Category,
    pub duration: u32,
    pub difficulty: Difficulty,
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }

    /// Estimate the active duration in minutes from the prescription,
    /// assuming 30 s per set plus the prescribed rest between sets.
    #[must_use]
    pub fn estimated_active_minutes(&self) -> u32 {
        let set_seconds = self.num_sets() * 30;
        let rest_seconds = self
            .exercises
            .iter()
            .map(|e| e.rest_seconds * e.sets.saturating_sub(1))
            .sum::<u32>();
        (set_seconds + rest_seconds + 30) / 60
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub name: Name,
    pub description: Option<String>,
    pub category: Category,
    pub duration: u32,
    pub difficulty: Difficulty,
    pub exercises: Vec<WorkoutExercise>,
}

#[derive(Deref, Debug, Default, Display, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A single entry of a workout prescription.
///
/// `reps` is a free-form spec such as "12-15" or "45s". `duration` is the
/// time in seconds a timed set runs for, if the exercise is timed.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub exercise_id: ExerciseID,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    pub weight: Option<f32>,
    pub duration: Option<u32>,
}

impl WorkoutExercise {
    /// The rep count to record for a completed set.
    ///
    /// Only a spec that is a plain integer has a single target count.
    /// Ranges and timed specs yield 0.
    #[must_use]
    pub fn target_reps(&self) -> u32 {
        self.reps.trim().parse().unwrap_or(0)
    }
}

/// Criteria for narrowing the workout list, analogous to
/// [`ExerciseFilter`](crate::ExerciseFilter). Duration bounds are
/// inclusive.
#[derive(Default, Debug, PartialEq)]
pub struct WorkoutFilter {
    pub search: String,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub min_duration: Option<u32>,
    pub max_duration: Option<u32>,
}

impl WorkoutFilter {
    #[must_use]
    pub fn matches(&self, workout: &Workout) -> bool {
        self.matches_search(workout)
            && self.category.is_none_or(|c| workout.category == c)
            && self.difficulty.is_none_or(|d| workout.difficulty == d)
            && self.min_duration.is_none_or(|min| workout.duration >= min)
            && self.max_duration.is_none_or(|max| workout.duration <= max)
    }

    #[must_use]
    pub fn apply<'a>(&self, workouts: impl Iterator<Item = &'a Workout>) -> Vec<&'a Workout> {
        workouts.filter(|w| self.matches(w)).collect()
    }

    fn matches_search(&self, workout: &Workout) -> bool {
        let term = self.search.to_lowercase();
        let term = term.trim();

        if term.is_empty() {
            return true;
        }

        workout.name.as_ref().to_lowercase().contains(term)
            || workout
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(term))
            || workout.category.name().contains(term)
    }
}
