//! Live sessions for running events.
//!
//! Each running event owns one [`LiveCallCoordinator`]. Admin callers mutate
//! it through the registry and players poll snapshots; there is no push
//! channel. Calls on one event never block another event.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::coordinator::{CalledState, LiveCallCoordinator, ResetConfirmation};
use crate::errors::SessionError;
use crate::variant::BingoTypeDef;

pub type EventId = String;

pub type SessionHandle = Arc<Mutex<LiveCallCoordinator>>;

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<EventId, SessionHandle>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a live session with an empty call set.
    ///
    /// Opening an event that is already live returns the existing session untouched.
    pub fn open(
        &self,
        event_id: &str,
        variant: &'static BingoTypeDef,
    ) -> Result<SessionHandle, SessionError> {
        let mut guard = self
            .sessions
            .write()
            .map_err(|_| SessionError::StoragePoisoned)?;
        let handle = guard
            .entry(event_id.to_string())
            .or_insert_with(|| {
                tracing::info!(event_id, variant = variant.id, "opening live bingo session");
                Arc::new(Mutex::new(LiveCallCoordinator::new(variant)))
            });
        Ok(Arc::clone(handle))
    }

    /// Resumes a session from persisted play data, replacing any live state.
    pub fn restore(
        &self,
        event_id: &str,
        variant: &'static BingoTypeDef,
        state: CalledState,
    ) -> Result<SessionHandle, SessionError> {
        let coordinator = LiveCallCoordinator::restore(variant, state)?;
        let handle = Arc::new(Mutex::new(coordinator));
        let mut guard = self
            .sessions
            .write()
            .map_err(|_| SessionError::StoragePoisoned)?;
        guard.insert(event_id.to_string(), Arc::clone(&handle));
        tracing::info!(event_id, "restored live bingo session");
        Ok(handle)
    }

    pub fn get(&self, event_id: &str) -> Result<SessionHandle, SessionError> {
        let guard = self
            .sessions
            .read()
            .map_err(|_| SessionError::StoragePoisoned)?;
        guard
            .get(event_id)
            .cloned()
            .ok_or_else(|| SessionError::NotFound(event_id.to_string()))
    }

    pub fn call(&self, event_id: &str, value: u32) -> Result<bool, SessionError> {
        self.with_session(event_id, |live| live.call(value))
    }

    pub fn uncall(&self, event_id: &str, value: u32) -> Result<bool, SessionError> {
        self.with_session(event_id, |live| live.uncall(value))
    }

    pub fn reset(&self, event_id: &str, confirm: ResetConfirmation) -> Result<usize, SessionError> {
        self.with_session(event_id, |live| live.reset(confirm))
    }

    /// Current called values, as served to polling viewers.
    pub fn poll(&self, event_id: &str) -> Result<CalledState, SessionError> {
        self.with_session(event_id, |live| Ok(live.snapshot()))
    }

    /// Destroys the session when its event is deleted.
    pub fn close(&self, event_id: &str) -> Result<CalledState, SessionError> {
        let removed = {
            let mut guard = self
                .sessions
                .write()
                .map_err(|_| SessionError::StoragePoisoned)?;
            guard.remove(event_id)
        };
        let handle = removed.ok_or_else(|| SessionError::NotFound(event_id.to_string()))?;
        let last = handle
            .lock()
            .map_err(|_| SessionError::StoragePoisoned)?
            .snapshot();
        tracing::info!(event_id, called = last.len(), "closed live bingo session");
        Ok(last)
    }

    /// Number of live sessions.
    pub fn len(&self) -> Result<usize, SessionError> {
        self.sessions
            .read()
            .map(|g| g.len())
            .map_err(|_| SessionError::StoragePoisoned)
    }

    pub fn is_empty(&self) -> Result<bool, SessionError> {
        self.len().map(|n| n == 0)
    }

    fn with_session<T>(
        &self,
        event_id: &str,
        f: impl FnOnce(&mut LiveCallCoordinator) -> Result<T, crate::errors::EngineError>,
    ) -> Result<T, SessionError> {
        let handle = self.get(event_id)?;
        let mut live = handle.lock().map_err(|_| SessionError::StoragePoisoned)?;
        f(&mut live).map_err(|err| {
            tracing::warn!(event_id, error = %err, "rejected live call request");
            SessionError::from(err)
        })
    }
}
