//! CallRecorder: a handler that remembers what it was called with.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;

use crate::payload::Payload;
use crate::traits::ActionHandler;

/// One recorded handler call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// `None` when the payload carried no `type`.
    pub action_type: Option<String>,
    pub payload: Payload,
}

/// In-memory handler for tests. Records every call and returns the state
/// unchanged. Clones share one log, so keep a clone for assertions after
/// registering the other in a table.
#[derive(Debug, Clone, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl CallRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.log().clone()
    }

    pub fn count(&self) -> usize {
        self.log().len()
    }

    pub fn was_called(&self) -> bool {
        self.count() > 0
    }

    // Poisoning is ignored so the log stays readable after a handler panic.
    fn log(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<S: Clone> ActionHandler<S> for CallRecorder {
    fn handle(&self, state: &S, payload: &Payload) -> Result<S> {
        let action_type = payload.action_type()?.map(str::to_string);
        self.log().push(RecordedCall {
            action_type,
            payload: payload.clone(),
        });
        Ok(state.clone())
    }
}
