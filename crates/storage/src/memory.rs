//! In-memory record store.
//!
//! The process owns a single [`Memory`] instance, created by the
//! composition root and seeded from the fixed starting catalog. Nothing
//! is persisted; a restart starts over from the seed data. Every
//! repository operation takes the lock once and runs to completion, so
//! operations never observe each other's partial effects.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;
use vigor_domain as domain;

use crate::seed;

pub struct Memory {
    records: RwLock<Records>,
}

#[derive(Default)]
struct Records {
    exercises: Vec<domain::Exercise>,
    workouts: Vec<domain::Workout>,
    progress: Vec<domain::ProgressRecord>,
    stats: Option<domain::UserStats>,
    preferences: Option<domain::UserPreferences>,
}

impl Memory {
    /// A store populated with the fixed starting catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records {
                exercises: seed::exercises(),
                workouts: seed::workouts(),
                progress: Vec::new(),
                stats: Some(seed::stats()),
                preferences: Some(seed::preferences()),
            }),
        }
    }

    /// A store without any records, for tests that bring their own data.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: RwLock::new(Records::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, domain::StorageError> {
        self.records
            .read()
            .map_err(|_| domain::StorageError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, domain::StorageError> {
        self.records
            .write()
            .map_err(|_| domain::StorageError::Poisoned)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl domain::ExerciseRepository for Memory {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        Ok(self.read()?.exercises.clone())
    }

    async fn read_exercise(
        &self,
        id: domain::ExerciseID,
    ) -> Result<Option<domain::Exercise>, domain::ReadError> {
        Ok(self.read()?.exercises.iter().find(|e| e.id == id).cloned())
    }

    async fn read_exercises_by_category(
        &self,
        category: domain::Category,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        Ok(self
            .read()?
            .exercises
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect())
    }

    async fn read_exercises_by_equipment(
        &self,
        equipment: domain::Equipment,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        Ok(self
            .read()?
            .exercises
            .iter()
            .filter(|e| e.equipment == equipment)
            .cloned()
            .collect())
    }

    async fn create_exercise(
        &self,
        exercise: domain::NewExercise,
    ) -> Result<domain::Exercise, domain::CreateError> {
        let exercise = domain::Exercise {
            id: Uuid::new_v4().into(),
            name: exercise.name,
            description: exercise.description,
            instructions: exercise.instructions,
            muscle_groups: exercise.muscle_groups,
            equipment: exercise.equipment,
            difficulty: exercise.difficulty,
            category: exercise.category,
            video_url: exercise.video_url,
        };

        self.write()?.exercises.push(exercise.clone());

        Ok(exercise)
    }
}

impl domain::WorkoutRepository for Memory {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        Ok(self.read()?.workouts.clone())
    }

    async fn read_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<Option<domain::Workout>, domain::ReadError> {
        Ok(self.read()?.workouts.iter().find(|w| w.id == id).cloned())
    }

    async fn read_workouts_by_category(
        &self,
        category: domain::Category,
    ) -> Result<Vec<domain::Workout>, domain::ReadError> {
        Ok(self
            .read()?
            .workouts
            .iter()
            .filter(|w| w.category == category)
            .cloned()
            .collect())
    }

    async fn create_workout(
        &self,
        workout: domain::NewWorkout,
    ) -> Result<domain::Workout, domain::CreateError> {
        // References into the exercise catalog are taken as-is; they only
        // resolve when a guided session is constructed.
        let workout = domain::Workout {
            id: Uuid::new_v4().into(),
            name: workout.name,
            description: workout.description,
            category: workout.category,
            duration: workout.duration,
            difficulty: workout.difficulty,
            exercises: workout.exercises,
        };

        self.write()?.workouts.push(workout.clone());

        Ok(workout)
    }
}

impl domain::ProgressRepository for Memory {
    async fn read_progress(&self) -> Result<Vec<domain::ProgressRecord>, domain::ReadError> {
        Ok(self.read()?.progress.clone())
    }

    async fn read_progress_by_workout(
        &self,
        workout_id: domain::WorkoutID,
    ) -> Result<Vec<domain::ProgressRecord>, domain::ReadError> {
        Ok(self
            .read()?
            .progress
            .iter()
            .filter(|p| p.workout_id == workout_id)
            .cloned()
            .collect())
    }

    async fn create_progress(
        &self,
        progress: domain::NewProgress,
    ) -> Result<domain::ProgressRecord, domain::CreateError> {
        let record = domain::ProgressRecord {
            id: Uuid::new_v4().into(),
            workout_id: progress.workout_id,
            exercise_id: progress.exercise_id,
            completed_at: progress.completed_at,
            sets: progress.sets,
            reps: progress.reps,
            weight: progress.weight,
            duration: progress.duration,
            notes: progress.notes,
        };

        self.write()?.progress.push(record.clone());

        Ok(record)
    }
}

impl domain::StatsRepository for Memory {
    async fn read_stats(&self) -> Result<Option<domain::UserStats>, domain::ReadError> {
        Ok(self.read()?.stats.clone())
    }

    async fn update_stats(
        &self,
        patch: domain::StatsPatch,
    ) -> Result<domain::UserStats, domain::UpdateError> {
        let mut records = self.write()?;
        let current = records
            .stats
            .take()
            .unwrap_or_else(|| domain::UserStats::new(Uuid::new_v4().into()));
        let updated = current.merged(patch);
        records.stats = Some(updated.clone());

        Ok(updated)
    }
}

impl domain::PreferencesRepository for Memory {
    async fn read_preferences(
        &self,
    ) -> Result<Option<domain::UserPreferences>, domain::ReadError> {
        Ok(self.read()?.preferences.clone())
    }

    async fn update_preferences(
        &self,
        patch: domain::PreferencesPatch,
    ) -> Result<domain::UserPreferences, domain::UpdateError> {
        let mut records = self.write()?;
        let current = records
            .preferences
            .take()
            .unwrap_or_else(|| domain::UserPreferences::new(Uuid::new_v4().into()));
        let updated = current.merged(patch);
        records.preferences = Some(updated.clone());

        Ok(updated)
    }
}
