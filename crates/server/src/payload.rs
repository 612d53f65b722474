//! JSON payload types for the HTTP boundary.
//!
//! Domain types stay serde-free; requests and responses go through these
//! camelCase structs. Enumerated properties travel as their wire names
//! and parse back through the domain's `TryFrom<&str>` implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vigor_domain as domain;
use vigor_domain::Property;

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePayload {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub instructions: Vec<String>,
    pub muscle_groups: Vec<String>,
    pub equipment: String,
    pub difficulty: String,
    pub category: String,
    pub video_url: Option<String>,
}

impl From<domain::Exercise> for ExercisePayload {
    fn from(value: domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            description: value.description,
            instructions: value.instructions,
            muscle_groups: value.muscle_groups,
            equipment: value.equipment.name().to_string(),
            difficulty: value.difficulty.name().to_string(),
            category: value.category.name().to_string(),
            video_url: value.video_url,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPayload {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub duration: u32,
    pub difficulty: String,
    pub exercises: Vec<WorkoutExercisePayload>,
}

impl From<domain::Workout> for WorkoutPayload {
    fn from(value: domain::Workout) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            description: value.description,
            category: value.category.name().to_string(),
            duration: value.duration,
            difficulty: value.difficulty.name().to_string(),
            exercises: value.exercises.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercisePayload {
    pub exercise_id: Uuid,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl From<domain::WorkoutExercise> for WorkoutExercisePayload {
    fn from(value: domain::WorkoutExercise) -> Self {
        Self {
            exercise_id: *value.exercise_id,
            sets: value.sets,
            reps: value.reps,
            rest_seconds: value.rest_seconds,
            weight: value.weight,
            duration: value.duration,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPayload {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight: Option<f32>,
    pub duration: Option<u32>,
    pub notes: Option<String>,
}

impl From<domain::ProgressRecord> for ProgressPayload {
    fn from(value: domain::ProgressRecord) -> Self {
        Self {
            id: *value.id,
            workout_id: *value.workout_id,
            exercise_id: *value.exercise_id,
            completed_at: value.completed_at,
            sets: value.sets,
            reps: value.reps,
            weight: value.weight,
            duration: value.duration,
            notes: value.notes,
        }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProgressPayload {
    pub workout_id: Uuid,
    pub exercise_id: Uuid,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub weight: Option<f32>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<NewProgressPayload> for domain::NewProgress {
    fn from(value: NewProgressPayload) -> Self {
        Self {
            workout_id: value.workout_id.into(),
            exercise_id: value.exercise_id.into(),
            completed_at: value.completed_at,
            sets: value.sets,
            reps: value.reps,
            weight: value.weight,
            duration: value.duration,
            notes: value.notes,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsPayload {
    pub id: Uuid,
    pub total_workouts: u32,
    pub current_streak: u32,
    pub weekly_goal: u32,
    pub weekly_progress: u32,
    pub last_workout_date: Option<DateTime<Utc>>,
}

impl From<domain::UserStats> for StatsPayload {
    fn from(value: domain::UserStats) -> Self {
        Self {
            id: *value.id,
            total_workouts: value.total_workouts,
            current_streak: value.current_streak,
            weekly_goal: value.weekly_goal,
            weekly_progress: value.weekly_progress,
            last_workout_date: value.last_workout_date,
        }
    }
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsPatchPayload {
    #[serde(default)]
    pub total_workouts: Option<u32>,
    #[serde(default)]
    pub current_streak: Option<u32>,
    #[serde(default)]
    pub weekly_goal: Option<u32>,
    #[serde(default)]
    pub weekly_progress: Option<u32>,
    #[serde(default)]
    pub last_workout_date: Option<DateTime<Utc>>,
}

impl From<StatsPatchPayload> for domain::StatsPatch {
    fn from(value: StatsPatchPayload) -> Self {
        Self {
            total_workouts: value.total_workouts,
            current_streak: value.current_streak,
            weekly_goal: value.weekly_goal,
            weekly_progress: value.weekly_progress,
            last_workout_date: value.last_workout_date,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPayload {
    pub id: Uuid,
    pub available_equipment: Vec<String>,
    pub preferred_difficulty: String,
    pub timer_enabled: bool,
    pub sound_enabled: bool,
}

impl From<domain::UserPreferences> for PreferencesPayload {
    fn from(value: domain::UserPreferences) -> Self {
        Self {
            id: *value.id,
            available_equipment: value
                .available_equipment
                .into_iter()
                .map(|e| e.name().to_string())
                .collect(),
            preferred_difficulty: value.preferred_difficulty.name().to_string(),
            timer_enabled: value.timer_enabled,
            sound_enabled: value.sound_enabled,
        }
    }
}

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatchPayload {
    #[serde(default)]
    pub available_equipment: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_difficulty: Option<String>,
    #[serde(default)]
    pub timer_enabled: Option<bool>,
    #[serde(default)]
    pub sound_enabled: Option<bool>,
}

impl TryFrom<PreferencesPatchPayload> for domain::PreferencesPatch {
    type Error = domain::PropertyError;

    fn try_from(value: PreferencesPatchPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            available_equipment: value
                .available_equipment
                .map(|equipment| {
                    equipment
                        .iter()
                        .map(|e| domain::Equipment::try_from(e.as_str()))
                        .collect::<Result<Vec<_>, _>>()
                })
                .transpose()?,
            preferred_difficulty: value
                .preferred_difficulty
                .as_deref()
                .map(domain::Difficulty::try_from)
                .transpose()?,
            timer_enabled: value.timer_enabled,
            sound_enabled: value.sound_enabled,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_exercise_payload_uses_wire_names() {
        let payload = ExercisePayload::from(domain::Exercise {
            id: 1.into(),
            name: domain::Name::new("Dumbbell Rows").unwrap(),
            description: None,
            instructions: vec![],
            muscle_groups: vec![String::from("Lats")],
            equipment: domain::Equipment::Dumbbells,
            difficulty: domain::Difficulty::Intermediate,
            category: domain::Category::Strength,
            video_url: None,
        });

        assert_eq!(payload.equipment, "Dumbbells");
        assert_eq!(payload.difficulty, "intermediate");
        assert_eq!(payload.category, "strength");
    }

    #[test]
    fn test_preferences_patch_payload_rejects_unknown_equipment() {
        let payload = PreferencesPatchPayload {
            available_equipment: Some(vec![String::from("Trampoline")]),
            ..PreferencesPatchPayload::default()
        };

        assert_eq!(
            domain::PreferencesPatch::try_from(payload),
            Err(domain::PropertyError::Unknown(String::from("Trampoline")))
        );
    }

    #[test]
    fn test_preferences_patch_payload_parses_equipment() {
        let payload = PreferencesPatchPayload {
            available_equipment: Some(vec![
                String::from("Bodyweight"),
                String::from("Pull-up Bar"),
            ]),
            preferred_difficulty: Some(String::from("advanced")),
            ..PreferencesPatchPayload::default()
        };

        assert_eq!(
            domain::PreferencesPatch::try_from(payload),
            Ok(domain::PreferencesPatch {
                available_equipment: Some(vec![
                    domain::Equipment::Bodyweight,
                    domain::Equipment::PullUpBar,
                ]),
                preferred_difficulty: Some(domain::Difficulty::Advanced),
                timer_enabled: None,
                sound_enabled: None,
            })
        );
    }
}
