use std::collections::BTreeMap;

use chrono::Utc;

use crate::{
    CreateError, Exercise, ExerciseID, NewProgress, ProgressRecord, ReadError, Workout,
    WorkoutExercise, WorkoutID,
};

/// Countdown length of a set without a prescribed duration.
pub const DEFAULT_SET_SECONDS: u32 = 45;

#[allow(async_fn_in_trait)]
pub trait SessionService {
    async fn start_session(&self, workout_id: WorkoutID)
    -> Result<GuidedSession, StartSessionError>;
    async fn record_completion(
        &self,
        completion: &SetCompletion,
    ) -> Result<ProgressRecord, CreateError>;
}

#[derive(thiserror::Error, Debug)]
pub enum StartSessionError {
    #[error("workout {0} not found")]
    UnknownWorkout(WorkoutID),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Read(#[from] ReadError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("workout references unknown exercise {0}")]
    UnknownExercise(ExerciseID),
    #[error("session has not been started")]
    NotStarted,
    #[error("session has already been started")]
    AlreadyStarted,
    #[error("no set is awaiting start")]
    NotAwaitingSet,
    #[error("no set is in progress")]
    NoSetInProgress,
    #[error("session is complete")]
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    AwaitingSet,
    SetInProgress,
    Completed,
}

/// A workout entry joined with its exercise from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub exercise: Exercise,
    pub prescription: WorkoutExercise,
}

/// What happened to the session position after a completed or skipped set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextSet { set_number: u32 },
    NextExercise { exercise_idx: usize },
    WorkoutComplete,
}

/// The outcome of a completed set: the progress record to persist and the
/// resulting position change. Exactly one completion is produced per set,
/// and none for skipped exercises.
#[derive(Debug, Clone, PartialEq)]
pub struct SetCompletion {
    pub progress: NewProgress,
    pub advance: Advance,
}

/// A runtime traversal of a workout's exercise list.
///
/// The plan is resolved against the exercise catalog once, at
/// construction; a prescription entry referencing a missing exercise
/// prevents the session from being created at all. The session owns the
/// set countdown and advances it one second per [`tick`](Self::tick)
/// call. Once `Completed` is reached the session is finished for good; a
/// restart means constructing a new session from the same workout.
#[derive(Debug, Clone, PartialEq)]
pub struct GuidedSession {
    workout_id: WorkoutID,
    plan: Vec<PlannedExercise>,
    phase: Phase,
    exercise_idx: usize,
    set_number: u32,
    countdown: Countdown,
}

impl GuidedSession {
    pub fn new(
        workout: &Workout,
        catalog: &BTreeMap<ExerciseID, Exercise>,
    ) -> Result<Self, SessionError> {
        let plan = workout
            .exercises
            .iter()
            .map(|prescription| {
                catalog
                    .get(&prescription.exercise_id)
                    .map(|exercise| PlannedExercise {
                        exercise: exercise.clone(),
                        prescription: prescription.clone(),
                    })
                    .ok_or(SessionError::UnknownExercise(prescription.exercise_id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            workout_id: workout.id,
            plan,
            phase: Phase::NotStarted,
            exercise_idx: 0,
            set_number: 1,
            countdown: Countdown::Idle,
        })
    }

    pub fn begin(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }

        self.phase = if self.plan.is_empty() {
            Phase::Completed
        } else {
            Phase::AwaitingSet
        };

        Ok(())
    }

    /// Arm the countdown for the pending set with the prescribed duration
    /// or [`DEFAULT_SET_SECONDS`].
    pub fn start_set(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::AwaitingSet {
            return Err(SessionError::NotAwaitingSet);
        }

        let seconds = self.plan[self.exercise_idx]
            .prescription
            .duration
            .unwrap_or(DEFAULT_SET_SECONDS);
        self.countdown.start(seconds);
        self.phase = Phase::SetInProgress;

        Ok(())
    }

    /// Advance the running countdown by one second. Reaching zero
    /// completes the set exactly like an explicit
    /// [`complete_set`](Self::complete_set) call.
    pub fn tick(&mut self) -> Option<SetCompletion> {
        if self.phase != Phase::SetInProgress {
            return None;
        }

        self.countdown.tick().then(|| self.finish_set())
    }

    pub fn complete_set(&mut self) -> Result<SetCompletion, SessionError> {
        if self.phase != Phase::SetInProgress {
            return Err(SessionError::NoSetInProgress);
        }

        self.countdown.cancel();

        Ok(self.finish_set())
    }

    /// Move on to the next exercise without recording anything for the
    /// remaining sets of the current one.
    pub fn skip_exercise(&mut self) -> Result<Advance, SessionError> {
        match self.phase {
            Phase::NotStarted => Err(SessionError::NotStarted),
            Phase::Completed => Err(SessionError::Completed),
            Phase::AwaitingSet | Phase::SetInProgress => Ok(self.advance_exercise()),
        }
    }

    pub fn pause(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::SetInProgress {
            return Err(SessionError::NoSetInProgress);
        }

        self.countdown.pause();

        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::SetInProgress {
            return Err(SessionError::NoSetInProgress);
        }

        self.countdown.resume();

        Ok(())
    }

    #[must_use]
    pub fn workout_id(&self) -> WorkoutID {
        self.workout_id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn plan(&self) -> &[PlannedExercise] {
        &self.plan
    }

    /// The exercise the session is currently positioned at.
    #[must_use]
    pub fn current(&self) -> Option<&PlannedExercise> {
        match self.phase {
            Phase::AwaitingSet | Phase::SetInProgress => self.plan.get(self.exercise_idx),
            Phase::NotStarted | Phase::Completed => None,
        }
    }

    #[must_use]
    pub fn exercise_idx(&self) -> usize {
        self.exercise_idx
    }

    #[must_use]
    pub fn set_number(&self) -> u32 {
        self.set_number
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.countdown.remaining()
    }

    fn finish_set(&mut self) -> SetCompletion {
        let planned = &self.plan[self.exercise_idx];
        let progress = NewProgress {
            workout_id: self.workout_id,
            exercise_id: planned.exercise.id,
            completed_at: Utc::now(),
            sets: Some(1),
            reps: Some(planned.prescription.target_reps()),
            weight: planned.prescription.weight,
            duration: planned.prescription.duration,
            notes: None,
        };

        let advance = if self.set_number < planned.prescription.sets {
            self.set_number += 1;
            self.phase = Phase::AwaitingSet;
            Advance::NextSet {
                set_number: self.set_number,
            }
        } else {
            self.advance_exercise()
        };

        SetCompletion { progress, advance }
    }

    fn advance_exercise(&mut self) -> Advance {
        self.countdown.cancel();

        if self.exercise_idx + 1 < self.plan.len() {
            self.exercise_idx += 1;
            self.set_number = 1;
            self.phase = Phase::AwaitingSet;
            Advance::NextExercise {
                exercise_idx: self.exercise_idx,
            }
        } else {
            self.phase = Phase::Completed;
            Advance::WorkoutComplete
        }
    }
}

/// A second-granularity countdown advanced by an external cadence.
///
/// Starting replaces whatever was armed before, so at most one countdown
/// is live at a time. Pausing keeps the remaining time; resuming
/// continues from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Idle,
    Running { remaining: u32 },
    Paused { remaining: u32 },
}

impl Countdown {
    pub fn start(&mut self, seconds: u32) {
        *self = Countdown::Running { remaining: seconds };
    }

    pub fn pause(&mut self) {
        if let Countdown::Running { remaining } = *self {
            *self = Countdown::Paused { remaining };
        }
    }

    pub fn resume(&mut self) {
        if let Countdown::Paused { remaining } = *self {
            *self = Countdown::Running { remaining };
        }
    }

    pub fn cancel(&mut self) {
        *self = Countdown::Idle;
    }

    /// Advance a running countdown by one second. Returns `true` when the
    /// countdown reaches zero and disarms itself.
    pub fn tick(&mut self) -> bool {
        if let Countdown::Running { remaining } = *self {
            if remaining <= 1 {
                *self = Countdown::Idle;
                return true;
            }
            *self = Countdown::Running {
                remaining: remaining - 1,
            };
        }

        false
    }

    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        match *self {
            Countdown::Idle => None,
            Countdown::Running { remaining } | Countdown::Paused { remaining } => Some(remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Category, Difficulty, Equipment, Name};

    use super::*;

    fn exercise(id: u128, name: &str) -> Exercise {
        Exercise {
            id: id.into(),
            name: Name::new(name).unwrap(),
            description: None,
            instructions: vec![],
            muscle_groups: vec![String::from("Full Body")],
            equipment: Equipment::Bodyweight,
            difficulty: Difficulty::Beginner,
            category: Category::Strength,
            video_url: None,
        }
    }

    fn entry(exercise_id: u128, sets: u32, reps: &str, duration: Option<u32>) -> WorkoutExercise {
        WorkoutExercise {
            exercise_id: exercise_id.into(),
            sets,
            reps: reps.to_string(),
            rest_seconds: 60,
            weight: None,
            duration,
        }
    }

    fn workout(entries: Vec<WorkoutExercise>) -> Workout {
        Workout {
            id: 1.into(),
            name: Name::new("Upper Body Strength").unwrap(),
            description: None,
            category: Category::Strength,
            duration: 45,
            difficulty: Difficulty::Intermediate,
            exercises: entries,
        }
    }

    fn catalog(exercises: &[Exercise]) -> BTreeMap<ExerciseID, Exercise> {
        exercises.iter().map(|e| (e.id, e.clone())).collect()
    }

    fn started_session(entries: Vec<WorkoutExercise>) -> GuidedSession {
        let exercises = [exercise(1, "Push-ups"), exercise(3, "Dumbbell Rows")];
        let mut session =
            GuidedSession::new(&workout(entries), &catalog(&exercises)).unwrap();
        session.begin().unwrap();
        session
    }

    #[test]
    fn test_new_fails_on_unknown_exercise() {
        let exercises = [exercise(1, "Push-ups")];

        assert_eq!(
            GuidedSession::new(
                &workout(vec![entry(1, 3, "12-15", None), entry(9, 1, "10", None)]),
                &catalog(&exercises),
            ),
            Err(SessionError::UnknownExercise(9.into()))
        );
    }

    #[test]
    fn test_begin_is_single_shot() {
        let exercises = [exercise(1, "Push-ups")];
        let mut session =
            GuidedSession::new(&workout(vec![entry(1, 1, "10", None)]), &catalog(&exercises))
                .unwrap();

        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.current(), None);

        session.begin().unwrap();

        assert_eq!(session.phase(), Phase::AwaitingSet);
        assert_eq!(session.begin(), Err(SessionError::AlreadyStarted));
    }

    #[test]
    fn test_begin_with_empty_plan_completes_immediately() {
        let mut session = GuidedSession::new(&workout(vec![]), &BTreeMap::new()).unwrap();

        session.begin().unwrap();

        assert_eq!(session.phase(), Phase::Completed);
    }

    #[test]
    fn test_full_traversal_emits_one_completion_per_set() {
        let mut session =
            started_session(vec![entry(1, 3, "12-15", None), entry(3, 1, "10", None)]);
        let mut completions = vec![];

        // three sets of the first exercise
        for set_number in 1..=3 {
            assert_eq!(session.set_number(), set_number);
            session.start_set().unwrap();
            completions.push(session.complete_set().unwrap());
        }
        assert_eq!(
            completions[0].advance,
            Advance::NextSet { set_number: 2 }
        );
        assert_eq!(
            completions[2].advance,
            Advance::NextExercise { exercise_idx: 1 }
        );

        // one set of the second exercise
        session.start_set().unwrap();
        completions.push(session.complete_set().unwrap());

        assert_eq!(completions[3].advance, Advance::WorkoutComplete);
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(completions.len(), 4);
        for completion in &completions {
            assert_eq!(completion.progress.workout_id, 1.into());
            assert_eq!(completion.progress.sets, Some(1));
        }
        assert!(
            completions[..3]
                .iter()
                .all(|c| c.progress.exercise_id == 1.into())
        );
        assert_eq!(completions[3].progress.exercise_id, 3.into());
    }

    #[test]
    fn test_completion_carries_prescription_values() {
        let mut session = started_session(vec![entry(1, 1, "12", Some(30))]);

        session.start_set().unwrap();
        let completion = session.complete_set().unwrap();

        assert_eq!(completion.progress.reps, Some(12));
        assert_eq!(completion.progress.duration, Some(30));
        assert_eq!(completion.progress.notes, None);
    }

    #[test]
    fn test_completion_reps_fall_back_to_zero() {
        let mut session = started_session(vec![entry(1, 1, "30-60s", None)]);

        session.start_set().unwrap();
        let completion = session.complete_set().unwrap();

        assert_eq!(completion.progress.reps, Some(0));
    }

    #[test]
    fn test_timer_elapse_completes_set() {
        let mut session = started_session(vec![entry(1, 1, "10", Some(3))]);

        session.start_set().unwrap();
        assert_eq!(session.remaining_seconds(), Some(3));

        assert_eq!(session.tick(), None);
        assert_eq!(session.tick(), None);
        assert_eq!(session.remaining_seconds(), Some(1));

        let completion = session.tick().unwrap();
        assert_eq!(completion.advance, Advance::WorkoutComplete);
        assert_eq!(session.phase(), Phase::Completed);

        // no further completions once the countdown has fired
        assert_eq!(session.tick(), None);
    }

    #[test]
    fn test_default_countdown_duration() {
        let mut session = started_session(vec![entry(1, 1, "10", None)]);

        session.start_set().unwrap();

        assert_eq!(session.remaining_seconds(), Some(DEFAULT_SET_SECONDS));
    }

    #[test]
    fn test_pause_halts_countdown_and_resume_continues() {
        let mut session = started_session(vec![entry(1, 1, "10", Some(10))]);

        session.start_set().unwrap();
        session.tick();
        session.tick();
        session.pause().unwrap();

        for _ in 0..5 {
            assert_eq!(session.tick(), None);
        }
        assert_eq!(session.remaining_seconds(), Some(8));

        session.resume().unwrap();
        session.tick();

        assert_eq!(session.remaining_seconds(), Some(7));
    }

    #[test]
    fn test_pause_requires_running_set() {
        let mut session = started_session(vec![entry(1, 1, "10", None)]);

        assert_eq!(session.pause(), Err(SessionError::NoSetInProgress));
        assert_eq!(session.resume(), Err(SessionError::NoSetInProgress));
    }

    #[test]
    fn test_skip_exercise_emits_nothing_and_advances_by_one() {
        let mut session =
            started_session(vec![entry(1, 3, "12-15", None), entry(3, 1, "10", None)]);

        assert_eq!(
            session.skip_exercise().unwrap(),
            Advance::NextExercise { exercise_idx: 1 }
        );
        assert_eq!(session.exercise_idx(), 1);
        assert_eq!(session.set_number(), 1);

        assert_eq!(session.skip_exercise().unwrap(), Advance::WorkoutComplete);
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.skip_exercise(), Err(SessionError::Completed));
    }

    #[test]
    fn test_skip_during_running_set_discards_countdown() {
        let mut session =
            started_session(vec![entry(1, 3, "12-15", None), entry(3, 1, "10", None)]);

        session.start_set().unwrap();
        session.skip_exercise().unwrap();

        assert_eq!(session.remaining_seconds(), None);
        assert_eq!(session.phase(), Phase::AwaitingSet);
    }

    #[test]
    fn test_start_set_requires_awaiting_set() {
        let mut session = started_session(vec![entry(1, 2, "10", None)]);

        session.start_set().unwrap();

        assert_eq!(session.start_set(), Err(SessionError::NotAwaitingSet));
    }

    #[test]
    fn test_complete_set_requires_running_set() {
        let mut session = started_session(vec![entry(1, 2, "10", None)]);

        assert_eq!(session.complete_set(), Err(SessionError::NoSetInProgress));
    }

    #[test]
    fn test_countdown_start_replaces_previous() {
        let mut countdown = Countdown::Idle;

        countdown.start(10);
        countdown.tick();
        countdown.start(5);

        assert_eq!(countdown.remaining(), Some(5));
    }

    #[test]
    fn test_countdown_tick_fires_once_and_disarms() {
        let mut countdown = Countdown::Idle;

        countdown.start(2);

        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert_eq!(countdown, Countdown::Idle);
        assert!(!countdown.tick());
    }

    #[test]
    fn test_countdown_pause_and_resume_preserve_remaining() {
        let mut countdown = Countdown::Idle;

        countdown.start(10);
        countdown.tick();
        countdown.pause();

        assert!(!countdown.tick());
        assert_eq!(countdown.remaining(), Some(9));

        countdown.resume();
        countdown.tick();

        assert_eq!(countdown.remaining(), Some(8));
    }

    #[test]
    fn test_countdown_pause_when_idle_is_a_no_op() {
        let mut countdown = Countdown::Idle;

        countdown.pause();
        countdown.resume();

        assert_eq!(countdown, Countdown::Idle);
    }
}
