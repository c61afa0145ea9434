//! Unlock-level state machine.
//!
//! The player starts at level 1 and can only ever move up, one level at a
//! time, by submitting the password for the next level. There is no
//! downgrade or reset operation.

use std::collections::BTreeMap;

use thiserror::Error;

/// Error type for unlock attempts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UnlockError {
    #[error("no unlock level beyond {0} is defined")]
    NoFurtherLevels(u8),
}

/// The player's unlock progress plus the fixed level-to-password table.
#[derive(Debug)]
pub struct UnlockState {
    level: u8,
    passwords: BTreeMap<u8, String>,
}

impl Default for UnlockState {
    fn default() -> Self {
        Self::new()
    }
}

impl UnlockState {
    /// State with the game's built-in password table.
    pub fn new() -> Self {
        let mut passwords = BTreeMap::new();
        passwords.insert(2, "vires_in_silentio".to_string());
        passwords.insert(3, "CENTINEL-1".to_string());
        Self::with_passwords(passwords)
    }

    /// State with a caller-supplied password table. Keys are the levels the
    /// passwords unlock, so they start at 2.
    pub fn with_passwords(passwords: BTreeMap<u8, String>) -> Self {
        UnlockState {
            level: 1,
            passwords,
        }
    }

    /// Current unlock level. Starts at 1, never decreases.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Highest level the password table can reach.
    pub fn max_level(&self) -> u8 {
        self.passwords.keys().max().copied().unwrap_or(1)
    }

    /// Compare `candidate` against the password for the next level.
    ///
    /// On a match the level increments by exactly 1 and `Ok(true)` is
    /// returned; on a mismatch the state is untouched and `Ok(false)` is
    /// returned. Attempting to unlock past the last defined level is an
    /// [`UnlockError::NoFurtherLevels`] rather than a silent no-op.
    pub fn attempt_unlock(&mut self, candidate: &str) -> Result<bool, UnlockError> {
        let next = self.level + 1;
        let expected = self
            .passwords
            .get(&next)
            .ok_or(UnlockError::NoFurtherLevels(self.level))?;

        if candidate == expected {
            self.level = next;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_level_one() {
        assert_eq!(UnlockState::new().level(), 1);
    }

    #[test]
    fn test_correct_password_increments_by_one() {
        let mut state = UnlockState::new();
        assert_eq!(state.attempt_unlock("vires_in_silentio"), Ok(true));
        assert_eq!(state.level(), 2);
        assert_eq!(state.attempt_unlock("CENTINEL-1"), Ok(true));
        assert_eq!(state.level(), 3);
    }

    #[test]
    fn test_wrong_password_leaves_state_unchanged() {
        let mut state = UnlockState::new();
        assert_eq!(state.attempt_unlock("CENTINEL-1"), Ok(false));
        assert_eq!(state.level(), 1);
    }

    #[test]
    fn test_unlock_past_max_level_is_reported() {
        let mut state = UnlockState::new();
        state.attempt_unlock("vires_in_silentio").unwrap();
        state.attempt_unlock("CENTINEL-1").unwrap();
        assert_eq!(state.level(), state.max_level());

        let err = state.attempt_unlock("anything").unwrap_err();
        assert_eq!(err, UnlockError::NoFurtherLevels(3));
        assert_eq!(state.level(), 3);
    }

    #[test]
    fn test_empty_table_has_no_unlockable_levels() {
        let mut state = UnlockState::with_passwords(BTreeMap::new());
        assert_eq!(state.max_level(), 1);
        assert_eq!(
            state.attempt_unlock("x"),
            Err(UnlockError::NoFurtherLevels(1))
        );
    }
}
