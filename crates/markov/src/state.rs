//! Health states of the cessation model.

use std::fmt;

/// Smoking-status health states.
///
/// The three states are exhaustive and mutually exclusive. `Dead` is the
/// single absorbing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HealthState {
    /// Currently smoking.
    Current = 0,
    /// Abstinent former smoker.
    Former = 1,
    /// Dead (absorbing).
    Dead = 2,
}

impl HealthState {
    /// All three states in index order.
    pub const ALL: [HealthState; 3] = [Self::Current, Self::Former, Self::Dead];

    /// Returns the zero-based index of this state (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Returns `true` for the absorbing state.
    pub fn is_absorbing(self) -> bool {
        matches!(self, Self::Dead)
    }

    /// Smoking status implied by entering this state, or `None` for `Dead`.
    pub fn is_smoking(self) -> Option<bool> {
        match self {
            Self::Current => Some(true),
            Self::Former => Some(false),
            Self::Dead => None,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Former => "Former",
            Self::Dead => "Dead",
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
