use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{Difficulty, Equipment, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait PreferencesRepository {
    async fn read_preferences(&self) -> Result<Option<UserPreferences>, ReadError>;
    async fn update_preferences(
        &self,
        patch: PreferencesPatch,
    ) -> Result<UserPreferences, UpdateError>;
}

#[allow(async_fn_in_trait)]
pub trait PreferencesService {
    async fn get_preferences(&self) -> Result<Option<UserPreferences>, ReadError>;
    async fn update_preferences(
        &self,
        patch: PreferencesPatch,
    ) -> Result<UserPreferences, UpdateError>;
}

/// User settings. A single record per store, updated through explicit
/// patches like [`UserStats`](crate::UserStats).
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    pub id: PreferencesID,
    pub available_equipment: Vec<Equipment>,
    pub preferred_difficulty: Difficulty,
    pub timer_enabled: bool,
    pub sound_enabled: bool,
}

impl UserPreferences {
    #[must_use]
    pub fn new(id: PreferencesID) -> Self {
        Self {
            id,
            available_equipment: Vec::new(),
            preferred_difficulty: Difficulty::Beginner,
            timer_enabled: true,
            sound_enabled: true,
        }
    }

    /// Overlay the fields present in `patch` onto `self`.
    #[must_use]
    pub fn merged(mut self, patch: PreferencesPatch) -> Self {
        if let Some(available_equipment) = patch.available_equipment {
            self.available_equipment = available_equipment;
        }
        if let Some(preferred_difficulty) = patch.preferred_difficulty {
            self.preferred_difficulty = preferred_difficulty;
        }
        if let Some(timer_enabled) = patch.timer_enabled {
            self.timer_enabled = timer_enabled;
        }
        if let Some(sound_enabled) = patch.sound_enabled {
            self.sound_enabled = sound_enabled;
        }
        self
    }
}

/// The updatable fields of [`UserPreferences`], each optional.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PreferencesPatch {
    pub available_equipment: Option<Vec<Equipment>>,
    pub preferred_difficulty: Option<Difficulty>,
    pub timer_enabled: Option<bool>,
    pub sound_enabled: Option<bool>,
}

#[derive(Deref, Debug, Default, Display, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PreferencesID(Uuid);

impl PreferencesID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PreferencesID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PreferencesID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_user_preferences_new_defaults() {
        assert_eq!(
            UserPreferences::new(1.into()),
            UserPreferences {
                id: 1.into(),
                available_equipment: vec![],
                preferred_difficulty: Difficulty::Beginner,
                timer_enabled: true,
                sound_enabled: true,
            }
        );
    }

    #[test]
    fn test_user_preferences_merged_overlays_present_fields() {
        let current = UserPreferences::new(1.into());

        let updated = current.clone().merged(PreferencesPatch {
            available_equipment: Some(vec![Equipment::Bodyweight, Equipment::Dumbbells]),
            sound_enabled: Some(false),
            ..PreferencesPatch::default()
        });

        assert_eq!(
            updated,
            UserPreferences {
                available_equipment: vec![Equipment::Bodyweight, Equipment::Dumbbells],
                sound_enabled: false,
                ..current
            }
        );
    }

    #[test]
    fn test_user_preferences_merged_empty_patch_is_identity() {
        let current = UserPreferences::new(1.into());

        assert_eq!(
            current.clone().merged(PreferencesPatch::default()),
            current
        );
    }
}
