//! Reducer-style action dispatch.
//!
//! Build an [`ActionTable`] mapping action types to handlers, hand it to
//! [`map_actions_to_reducers`], and call the returned [`Dispatcher`] with
//! `(state, payload)`. The payload's `type` field picks the handler; unknown
//! types fall through to a default handler that leaves the state alone.

pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod payload;
pub mod recorder;
pub mod table;
pub mod traits;

pub use dispatcher::{map_actions_to_reducers, Dispatcher};
pub use error::DispatchError;
pub use payload::Payload;
pub use recorder::{CallRecorder, RecordedCall};
pub use table::ActionTable;
pub use traits::{ActionHandler, Handler};
