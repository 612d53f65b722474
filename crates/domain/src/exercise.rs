use std::slice::Iter;

use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{CreateError, Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercise(&self, id: ExerciseID) -> Result<Option<Exercise>, ReadError>;
    async fn read_exercises_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercises_by_equipment(
        &self,
        equipment: Equipment,
    ) -> Result<Vec<Exercise>, ReadError>;
    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercise(&self, id: ExerciseID) -> Result<Option<Exercise>, ReadError>;
    async fn get_exercises_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercises_by_equipment(
        &self,
        equipment: Equipment,
    ) -> Result<Vec<Exercise>, ReadError>;
    async fn create_exercise(&self, exercise: NewExercise) -> Result<Exercise, CreateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub description: Option<String>,
    pub instructions: Vec<String>,
    pub muscle_groups: Vec<String>,
    pub equipment: Equipment,
    pub difficulty: Difficulty,
    pub category: Category,
    pub video_url: Option<String>,
}

/// An exercise definition without an assigned identifier.
///
/// The repository assigns the identifier on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub name: Name,
    pub description: Option<String>,
    pub instructions: Vec<String>,
    pub muscle_groups: Vec<String>,
    pub equipment: Equipment,
    pub difficulty: Difficulty,
    pub category: Category,
    pub video_url: Option<String>,
}

#[derive(Deref, Debug, Default, Display, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_property(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Strength,
    Cardio,
    Yoga,
    Sports,
    Stretching,
    Flexibility,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 6] = [
            Category::Strength,
            Category::Cardio,
            Category::Yoga,
            Category::Sports,
            Category::Stretching,
            Category::Flexibility,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Strength => "strength",
            Category::Cardio => "cardio",
            Category::Yoga => "yoga",
            Category::Sports => "sports",
            Category::Stretching => "stretching",
            Category::Flexibility => "flexibility",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_property(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    Barbells,
    ResistanceBands,
    Kettlebells,
    PullUpBar,
    Bench,
    CableMachine,
    MedicineBall,
    StabilityBall,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 10] = [
            Equipment::Bodyweight,
            Equipment::Dumbbells,
            Equipment::Barbells,
            Equipment::ResistanceBands,
            Equipment::Kettlebells,
            Equipment::PullUpBar,
            Equipment::Bench,
            Equipment::CableMachine,
            Equipment::MedicineBall,
            Equipment::StabilityBall,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Barbells => "Barbells",
            Equipment::ResistanceBands => "Resistance Bands",
            Equipment::Kettlebells => "Kettlebells",
            Equipment::PullUpBar => "Pull-up Bar",
            Equipment::Bench => "Bench",
            Equipment::CableMachine => "Cable Machine",
            Equipment::MedicineBall => "Medicine Ball",
            Equipment::StabilityBall => "Stability Ball",
        }
    }
}

impl TryFrom<&str> for Equipment {
    type Error = PropertyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_property(value)
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

fn parse_property<P: Property + 'static>(value: &str) -> Result<P, PropertyError> {
    P::iter()
        .find(|p| p.name() == value)
        .copied()
        .ok_or_else(|| PropertyError::Unknown(value.to_string()))
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PropertyError {
    #[error("unknown value: {0}")]
    Unknown(String),
}

/// Criteria for narrowing the exercise library.
///
/// All present criteria must hold for an exercise to be included. The
/// search term matches case-insensitively against name, description,
/// muscle group names and the equipment name.
#[derive(Default, Debug, PartialEq)]
pub struct ExerciseFilter {
    pub search: String,
    pub category: Option<Category>,
    pub equipment: Option<Equipment>,
    pub difficulty: Option<Difficulty>,
    pub muscle_group: Option<String>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.matches_search(exercise)
            && self.category.is_none_or(|c| exercise.category == c)
            && self.equipment.is_none_or(|e| exercise.equipment == e)
            && self.difficulty.is_none_or(|d| exercise.difficulty == d)
            && self.muscle_group.as_ref().is_none_or(|group| {
                let group = group.to_lowercase();
                exercise
                    .muscle_groups
                    .iter()
                    .any(|m| m.to_lowercase().contains(&group))
            })
    }

    #[must_use]
    pub fn apply<'a>(&self, exercises: impl Iterator<Item = &'a Exercise>) -> Vec<&'a Exercise> {
        exercises.filter(|e| self.matches(e)).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.category.is_none()
            && self.equipment.is_none()
            && self.difficulty.is_none()
            && self.muscle_group.is_none()
    }

    fn matches_search(&self, exercise: &Exercise) -> bool {
        let term = self.search.to_lowercase();
        let term = term.trim();

        if term.is_empty() {
            return true;
        }

        exercise.name.as_ref().to_lowercase().contains(term)
            || exercise
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(term))
            || exercise
                .muscle_groups
                .iter()
                .any(|m| m.to_lowercase().contains(term))
            || exercise.equipment.name().to_lowercase().contains(term)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(name: &str) -> Exercise {
        Exercise {
            id: 1.into(),
            name: Name::new(name).unwrap(),
            description: Some(String::from("Classic bodyweight exercise")),
            instructions: vec![String::from("Start in a plank position")],
            muscle_groups: vec![String::from("Chest"), String::from("Triceps")],
            equipment: Equipment::Bodyweight,
            difficulty: Difficulty::Beginner,
            category: Category::Strength,
            video_url: None,
        }
    }

    #[test]
    fn test_exercise_id_nil() {
        assert!(ExerciseID::nil().is_nil());
        assert_eq!(ExerciseID::nil(), ExerciseID::default());
    }

    #[test]
    fn test_difficulty_name() {
        let mut names = HashSet::new();

        for difficulty in Difficulty::iter() {
            let name = difficulty.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_category_name() {
        let mut names = HashSet::new();

        for category in Category::iter() {
            let name = category.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_equipment_name() {
        let mut names = HashSet::new();

        for equipment in Equipment::iter() {
            let name = equipment.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_property_try_from_round_trip() {
        for difficulty in Difficulty::iter() {
            assert_eq!(Difficulty::try_from(difficulty.name()), Ok(*difficulty));
        }
        for category in Category::iter() {
            assert_eq!(Category::try_from(category.name()), Ok(*category));
        }
        for equipment in Equipment::iter() {
            assert_eq!(Equipment::try_from(equipment.name()), Ok(*equipment));
        }
    }

    #[rstest]
    #[case("Strength")]
    #[case("STRENGTH")]
    #[case("weights")]
    fn test_property_try_from_unknown(#[case] value: &str) {
        assert_eq!(
            Category::try_from(value),
            Err(PropertyError::Unknown(value.to_string()))
        );
    }

    #[rstest]
    #[case::empty(ExerciseFilter::default(), true)]
    #[case::search_lower_case(
        ExerciseFilter { search: "push".into(), ..ExerciseFilter::default() },
        true
    )]
    #[case::search_upper_case(
        ExerciseFilter { search: "PUSH".into(), ..ExerciseFilter::default() },
        true
    )]
    #[case::search_description(
        ExerciseFilter { search: "bodyweight exercise".into(), ..ExerciseFilter::default() },
        true
    )]
    #[case::search_muscle_group(
        ExerciseFilter { search: "triceps".into(), ..ExerciseFilter::default() },
        true
    )]
    #[case::search_equipment(
        ExerciseFilter { search: "bodyweight".into(), ..ExerciseFilter::default() },
        true
    )]
    #[case::search_no_match(
        ExerciseFilter { search: "deadlift".into(), ..ExerciseFilter::default() },
        false
    )]
    #[case::category(
        ExerciseFilter { category: Some(Category::Strength), ..ExerciseFilter::default() },
        true
    )]
    #[case::category_no_match(
        ExerciseFilter { category: Some(Category::Cardio), ..ExerciseFilter::default() },
        false
    )]
    #[case::equipment(
        ExerciseFilter { equipment: Some(Equipment::Bodyweight), ..ExerciseFilter::default() },
        true
    )]
    #[case::equipment_no_match(
        ExerciseFilter { equipment: Some(Equipment::Dumbbells), ..ExerciseFilter::default() },
        false
    )]
    #[case::difficulty(
        ExerciseFilter { difficulty: Some(Difficulty::Beginner), ..ExerciseFilter::default() },
        true
    )]
    #[case::muscle_group(
        ExerciseFilter { muscle_group: Some("chest".into()), ..ExerciseFilter::default() },
        true
    )]
    #[case::muscle_group_no_match(
        ExerciseFilter { muscle_group: Some("quads".into()), ..ExerciseFilter::default() },
        false
    )]
    #[case::all_criteria(
        ExerciseFilter {
            search: "push".into(),
            category: Some(Category::Strength),
            equipment: Some(Equipment::Bodyweight),
            difficulty: Some(Difficulty::Beginner),
            muscle_group: Some("Chest".into()),
        },
        true
    )]
    #[case::one_criterion_fails(
        ExerciseFilter {
            search: "push".into(),
            category: Some(Category::Strength),
            equipment: Some(Equipment::Dumbbells),
            ..ExerciseFilter::default()
        },
        false
    )]
    fn test_exercise_filter_matches(#[case] filter: ExerciseFilter, #[case] expected: bool) {
        assert_eq!(filter.matches(&exercise("Push-ups")), expected);
    }

    #[test]
    fn test_exercise_filter_apply() {
        let push_ups = exercise("Push-ups");
        let mut squats = exercise("Squats");
        squats.muscle_groups = vec![String::from("Quadriceps"), String::from("Glutes")];
        let exercises = [push_ups.clone(), squats];
        let filter = ExerciseFilter {
            muscle_group: Some("chest".into()),
            ..ExerciseFilter::default()
        };

        assert_eq!(filter.apply(exercises.iter()), vec![&push_ups]);
    }

    #[test]
    fn test_exercise_filter_is_empty() {
        assert!(ExerciseFilter::default().is_empty());
        assert!(
            ExerciseFilter {
                search: "  ".into(),
                ..ExerciseFilter::default()
            }
            .is_empty()
        );
        assert!(
            !ExerciseFilter {
                difficulty: Some(Difficulty::Advanced),
                ..ExerciseFilter::default()
            }
            .is_empty()
        );
    }
}
