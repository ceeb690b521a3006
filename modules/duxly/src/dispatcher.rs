//! The dispatcher and its factory.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::error::DispatchError;
use crate::payload::Payload;
use crate::table::ActionTable;

/// Build a dispatcher over `table`.
///
/// Never fails; an empty table is fine and yields a dispatcher that always
/// falls through to the default handler.
pub fn map_actions_to_reducers<S>(table: impl Into<Arc<ActionTable<S>>>) -> Dispatcher<S> {
    let table = table.into();
    trace!(handlers = table.len(), "action dispatcher created");
    Dispatcher { table }
}

/// Resolves a payload's `type` to a handler and calls it.
///
/// Holds the action table and nothing else. Clones share the same table.
pub struct Dispatcher<S> {
    table: Arc<ActionTable<S>>,
}

impl<S: Clone> Dispatcher<S> {
    /// Call the handler registered for `payload`'s type, or the default
    /// handler if there is none. The handler's result is discarded.
    pub fn dispatch(&self, state: &S, payload: &Payload) -> Result<(), DispatchError> {
        self.reduce(state, payload)?;
        Ok(())
    }

    /// Same lookup and call as [`dispatch`](Self::dispatch), but returns the
    /// selected handler's next state.
    pub fn reduce(&self, state: &S, payload: &Payload) -> Result<S, DispatchError> {
        let action_type = match payload.action_type() {
            Ok(action_type) => action_type,
            Err(err) => {
                warn!(error = %err, "payload has no usable action type");
                return Err(err);
            }
        };

        let Some(action_type) = action_type else {
            debug!("payload has no action type, using default");
            return Ok(return_default_state(state));
        };

        match self.table.get(action_type) {
            Some(handler) => {
                debug!(action_type, "dispatching to registered handler");
                Ok(handler.handle(state, payload)?)
            }
            None => {
                debug!(action_type, "no handler registered, using default");
                Ok(return_default_state(state))
            }
        }
    }

    /// The dispatcher as a plain function value.
    pub fn as_fn(&self) -> impl Fn(&S, &Payload) -> Result<(), DispatchError> + Send + Sync {
        let dispatcher = self.clone();
        move |state: &S, payload: &Payload| dispatcher.dispatch(state, payload)
    }
}

impl<S> Dispatcher<S> {
    /// Whether `action_type` has a registered handler.
    pub fn handles(&self, action_type: &str) -> bool {
        self.table.contains(action_type)
    }

    pub fn table(&self) -> &ActionTable<S> {
        &self.table
    }
}

fn return_default_state<S: Clone>(state: &S) -> S {
    state.clone()
}

impl<S> Clone for Dispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<S> fmt::Debug for Dispatcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("table", &self.table)
            .finish()
    }
}
