//! Handler trait for the action table.

use std::sync::Arc;

use anyhow::Result;

use crate::payload::Payload;

/// Handles one action type.
///
/// Receives the current state and the full payload and returns the handler's
/// next state. [`Dispatcher::dispatch`](crate::Dispatcher::dispatch) discards
/// that value; [`Dispatcher::reduce`](crate::Dispatcher::reduce) hands it back.
///
/// Implemented for any `Fn(&S, &Payload) -> Result<S>` closure, and by
/// [`CallRecorder`](crate::CallRecorder) for tests.
pub trait ActionHandler<S>: Send + Sync {
    fn handle(&self, state: &S, payload: &Payload) -> Result<S>;
}

impl<S, F> ActionHandler<S> for F
where
    F: Fn(&S, &Payload) -> Result<S> + Send + Sync,
{
    fn handle(&self, state: &S, payload: &Payload) -> Result<S> {
        self(state, payload)
    }
}

/// A handler as stored in an [`ActionTable`](crate::ActionTable).
pub type Handler<S> = Arc<dyn ActionHandler<S>>;
