use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{EngineError, ValidationError, ValidationErrorKind};
use crate::variant::BingoTypeDef;

/// Called values of a running event ("play data").
///
/// Stored sorted so the persisted blob is stable across writers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalledState {
    called_values: BTreeSet<u32>,
}

impl CalledState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &BTreeSet<u32> {
        &self.called_values
    }

    pub fn contains(&self, value: u32) -> bool {
        self.called_values.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.called_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.called_values.is_empty()
    }

    pub(crate) fn deserialize_checked(raw: &Value) -> Result<Self, ValidationError> {
        if !raw.is_object() {
            return Err(ValidationError::new(
                "$",
                ValidationErrorKind::WrongType { expected: "object" },
            ));
        }
        if raw.get("calledValues").is_none() {
            return Err(ValidationError::new(
                "calledValues",
                ValidationErrorKind::MissingField,
            ));
        }
        CalledState::deserialize(raw).map_err(|e| {
            ValidationError::new("calledValues", ValidationErrorKind::MalformedJson(e.to_string()))
        })
    }
}

impl FromIterator<u32> for CalledState {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            called_values: iter.into_iter().collect(),
        }
    }
}

/// Explicit acknowledgement required by [`LiveCallCoordinator::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetConfirmation {
    Confirmed,
    Unconfirmed,
}

impl From<bool> for ResetConfirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            ResetConfirmation::Confirmed
        } else {
            ResetConfirmation::Unconfirmed
        }
    }
}

/// Authoritative called-values state for one running event.
///
/// Call and uncall are idempotent. The coordinator never computes or caches
/// win state: viewers poll [`LiveCallCoordinator::snapshot`] and run the win
/// detector against their own cards.
///
/// # Examples
///
/// ```
/// use bingo_engine::coordinator::{LiveCallCoordinator, ResetConfirmation};
/// use bingo_engine::variant;
///
/// let mut live = LiveCallCoordinator::new(variant::lookup("75-ball").unwrap());
/// assert_eq!(live.call(17), Ok(true));
/// assert_eq!(live.call(17), Ok(false)); // double submit is a no-op
/// assert_eq!(live.uncall(44), Ok(false));
/// assert!(live.call(99).is_err());
/// assert_eq!(live.reset(ResetConfirmation::Confirmed), Ok(1));
/// assert!(live.snapshot().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct LiveCallCoordinator {
    variant: &'static BingoTypeDef,
    state: CalledState,
}

impl LiveCallCoordinator {
    pub fn new(variant: &'static BingoTypeDef) -> Self {
        Self {
            variant,
            state: CalledState::new(),
        }
    }

    /// Resumes from persisted play data, rejecting values outside the variant.
    pub fn restore(variant: &'static BingoTypeDef, state: CalledState) -> Result<Self, EngineError> {
        if let Some(bad) = state.values().iter().find(|v| !variant.contains(**v)) {
            return Err(EngineError::InvalidValue(*bad));
        }
        Ok(Self { variant, state })
    }

    pub fn variant(&self) -> &'static BingoTypeDef {
        self.variant
    }

    /// Marks `value` as drawn. Returns whether the set changed.
    pub fn call(&mut self, value: u32) -> Result<bool, EngineError> {
        self.check(value)?;
        let changed = self.state.called_values.insert(value);
        tracing::debug!(value, changed, "ball called");
        Ok(changed)
    }

    /// Reverts a call. Returns whether the set changed.
    pub fn uncall(&mut self, value: u32) -> Result<bool, EngineError> {
        self.check(value)?;
        let changed = self.state.called_values.remove(&value);
        tracing::debug!(value, changed, "ball uncalled");
        Ok(changed)
    }

    /// Clears every called value. Returns how many were cleared.
    pub fn reset(&mut self, confirm: ResetConfirmation) -> Result<usize, EngineError> {
        if confirm != ResetConfirmation::Confirmed {
            return Err(EngineError::ResetNotConfirmed);
        }
        let cleared = self.state.len();
        self.state.called_values.clear();
        tracing::info!(cleared, "called values reset");
        Ok(cleared)
    }

    pub fn is_called(&self, value: u32) -> bool {
        self.state.contains(value)
    }

    pub fn called_values(&self) -> &BTreeSet<u32> {
        self.state.values()
    }

    /// Copy of the current state, as handed to polling viewers.
    pub fn snapshot(&self) -> CalledState {
        self.state.clone()
    }

    fn check(&self, value: u32) -> Result<(), EngineError> {
        if self.variant.contains(value) {
            Ok(())
        } else {
            Err(EngineError::InvalidValue(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant;
    use serde_json::json;

    fn live() -> LiveCallCoordinator {
        LiveCallCoordinator::new(variant::lookup("75-ball").unwrap())
    }

    #[test]
    fn free_sentinel_is_not_callable() {
        assert_eq!(live().call(0), Err(EngineError::InvalidValue(0)));
    }

    #[test]
    fn unconfirmed_reset_keeps_state() {
        let mut l = live();
        l.call(5).unwrap();
        assert_eq!(
            l.reset(ResetConfirmation::Unconfirmed),
            Err(EngineError::ResetNotConfirmed)
        );
        assert!(l.is_called(5));
    }

    #[test]
    fn restore_rejects_foreign_values() {
        let state: CalledState = [3, 80].into_iter().collect();
        let err = LiveCallCoordinator::restore(variant::lookup("75-ball").unwrap(), state);
        assert_eq!(err.unwrap_err(), EngineError::InvalidValue(80));
    }

    #[test]
    fn play_data_requires_called_values_field() {
        let err = CalledState::deserialize_checked(&json!({})).unwrap_err();
        assert_eq!(err.path, "calledValues");
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
    }

    #[test]
    fn play_data_rejects_negative_values() {
        let err = CalledState::deserialize_checked(&json!({"calledValues": [1, -2]})).unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::MalformedJson(_)));
    }
}
