//! The fixed starting catalog.
//!
//! Loaded into a fresh [`Memory`](crate::Memory) on construction. The
//! identifiers are derived from small integers so that they are stable
//! across restarts.

use chrono::Utc;
use vigor_domain as domain;
use vigor_domain::{Category, Difficulty, Equipment};

#[must_use]
pub fn exercises() -> Vec<domain::Exercise> {
    vec![
        exercise(
            1,
            "Push-ups",
            "Classic bodyweight exercise for chest, triceps, and shoulders",
            &[
                "Start in a plank position with your hands slightly wider than shoulder-width apart",
                "Lower your body until your chest nearly touches the floor",
                "Push yourself back up to the starting position",
                "Keep your body in a straight line throughout the movement",
            ],
            &["Chest", "Triceps", "Shoulders", "Core"],
            Equipment::Bodyweight,
            Difficulty::Beginner,
            Category::Strength,
        ),
        exercise(
            2,
            "Squats",
            "Fundamental lower body exercise",
            &[
                "Stand with feet shoulder-width apart",
                "Lower your body by bending your knees and pushing your hips back",
                "Keep your chest up and knees in line with your toes",
                "Return to standing position by driving through your heels",
            ],
            &["Quadriceps", "Glutes", "Hamstrings", "Calves"],
            Equipment::Bodyweight,
            Difficulty::Beginner,
            Category::Strength,
        ),
        exercise(
            3,
            "Dumbbell Rows",
            "Back strengthening exercise",
            &[
                "Hold a dumbbell in one hand and place the other hand on a bench",
                "Keep your back straight and core engaged",
                "Pull the dumbbell up to your ribcage",
                "Lower the weight with control",
            ],
            &["Latissimus Dorsi", "Rhomboids", "Biceps"],
            Equipment::Dumbbells,
            Difficulty::Intermediate,
            Category::Strength,
        ),
        exercise(
            4,
            "Burpees",
            "Full-body cardio exercise",
            &[
                "Start in a standing position",
                "Drop down into a squat position and place hands on the ground",
                "Jump your feet back into a plank position",
                "Do a push-up, then jump feet back to squat",
                "Jump up with arms overhead",
            ],
            &["Full Body"],
            Equipment::Bodyweight,
            Difficulty::Advanced,
            Category::Cardio,
        ),
        exercise(
            5,
            "Downward Dog",
            "Classic yoga pose for flexibility and strength",
            &[
                "Start on hands and knees",
                "Tuck your toes and lift your hips up",
                "Straighten your legs and arms",
                "Hold the position while breathing deeply",
            ],
            &["Shoulders", "Hamstrings", "Calves", "Core"],
            Equipment::Bodyweight,
            Difficulty::Beginner,
            Category::Yoga,
        ),
        exercise(
            6,
            "Jumping Jacks",
            "Classic cardio warm-up exercise",
            &[
                "Start with feet together and arms at your sides",
                "Jump while spreading legs shoulder-width apart",
                "Simultaneously raise arms overhead",
                "Jump back to starting position",
            ],
            &["Full Body"],
            Equipment::Bodyweight,
            Difficulty::Beginner,
            Category::Cardio,
        ),
        exercise(
            7,
            "Plank",
            "Core strengthening exercise",
            &[
                "Start in a push-up position",
                "Lower down to your forearms",
                "Keep your body in a straight line",
                "Hold the position while breathing normally",
            ],
            &["Core", "Shoulders", "Glutes"],
            Equipment::Bodyweight,
            Difficulty::Beginner,
            Category::Strength,
        ),
        exercise(
            8,
            "Deadlifts",
            "Compound exercise for posterior chain",
            &[
                "Stand with feet hip-width apart, barbell over mid-foot",
                "Bend at hips and knees to grip the bar",
                "Keep chest up and back straight",
                "Drive through heels to stand up straight",
            ],
            &["Hamstrings", "Glutes", "Lower Back", "Traps"],
            Equipment::Barbells,
            Difficulty::Intermediate,
            Category::Strength,
        ),
    ]
}

#[must_use]
pub fn workouts() -> Vec<domain::Workout> {
    vec![
        domain::Workout {
            id: 1.into(),
            name: domain::Name::new("Upper Body Strength").unwrap(),
            description: Some(String::from("Focus on building upper body strength")),
            category: Category::Strength,
            duration: 45,
            difficulty: Difficulty::Intermediate,
            exercises: vec![
                entry(1, 3, "12-15", 60),
                entry(3, 3, "10-12", 90),
                entry(7, 3, "30-60s", 60),
            ],
        },
        domain::Workout {
            id: 2.into(),
            name: domain::Name::new("Lower Body Power").unwrap(),
            description: Some(String::from("Build lower body strength and power")),
            category: Category::Strength,
            duration: 40,
            difficulty: Difficulty::Beginner,
            exercises: vec![entry(2, 3, "15-20", 60), entry(8, 3, "8-10", 120)],
        },
        domain::Workout {
            id: 3.into(),
            name: domain::Name::new("HIIT Cardio Blast").unwrap(),
            description: Some(String::from("High-intensity interval training")),
            category: Category::Cardio,
            duration: 25,
            difficulty: Difficulty::Advanced,
            exercises: vec![entry(4, 4, "45s", 15), entry(6, 4, "30s", 30)],
        },
        domain::Workout {
            id: 4.into(),
            name: domain::Name::new("Morning Yoga Flow").unwrap(),
            description: Some(String::from("Gentle yoga sequence to start your day")),
            category: Category::Yoga,
            duration: 30,
            difficulty: Difficulty::Beginner,
            exercises: vec![entry(5, 1, "60s", 10)],
        },
    ]
}

#[must_use]
pub fn stats() -> domain::UserStats {
    domain::UserStats {
        id: 1.into(),
        total_workouts: 12,
        current_streak: 5,
        weekly_goal: 4,
        weekly_progress: 3,
        last_workout_date: Some(Utc::now()),
    }
}

#[must_use]
pub fn preferences() -> domain::UserPreferences {
    domain::UserPreferences {
        id: 1.into(),
        available_equipment: vec![Equipment::Bodyweight, Equipment::Dumbbells],
        preferred_difficulty: Difficulty::Beginner,
        timer_enabled: true,
        sound_enabled: true,
    }
}

#[allow(clippy::too_many_arguments)]
fn exercise(
    id: u128,
    name: &str,
    description: &str,
    instructions: &[&str],
    muscle_groups: &[&str],
    equipment: Equipment,
    difficulty: Difficulty,
    category: Category,
) -> domain::Exercise {
    domain::Exercise {
        id: id.into(),
        name: domain::Name::new(name).unwrap(),
        description: Some(description.to_string()),
        instructions: instructions.iter().map(ToString::to_string).collect(),
        muscle_groups: muscle_groups.iter().map(ToString::to_string).collect(),
        equipment,
        difficulty,
        category,
        video_url: None,
    }
}

fn entry(exercise_id: u128, sets: u32, reps: &str, rest_seconds: u32) -> domain::WorkoutExercise {
    domain::WorkoutExercise {
        exercise_id: exercise_id.into(),
        sets,
        reps: reps.to_string(),
        rest_seconds,
        weight: None,
        duration: None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_identifiers_are_unique() {
        let exercise_ids = exercises().iter().map(|e| e.id).collect::<HashSet<_>>();
        let workout_ids = workouts().iter().map(|w| w.id).collect::<HashSet<_>>();

        assert_eq!(exercise_ids.len(), exercises().len());
        assert_eq!(workout_ids.len(), workouts().len());
    }

    #[test]
    fn test_seed_covers_multiple_categories() {
        let categories = workouts().iter().map(|w| w.category).collect::<HashSet<_>>();

        assert!(categories.contains(&Category::Strength));
        assert!(categories.contains(&Category::Cardio));
        assert!(categories.contains(&Category::Yoga));
    }

    #[test]
    fn test_seed_workouts_reference_seed_exercises() {
        let exercise_ids = exercises().iter().map(|e| e.id).collect::<HashSet<_>>();

        for workout in workouts() {
            for entry in &workout.exercises {
                assert!(exercise_ids.contains(&entry.exercise_id));
            }
        }
    }
}
