//! The action table: action type → handler.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use crate::payload::Payload;
use crate::traits::{ActionHandler, Handler};

/// Maps action-type strings to handlers.
///
/// Keys are unique; registering the same type twice replaces the earlier
/// handler. The table is only ever read once it is handed to a dispatcher.
pub struct ActionTable<S> {
    handlers: HashMap<String, Handler<S>>,
}

impl<S> ActionTable<S> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a closure for `action_type`.
    pub fn on<F>(mut self, action_type: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&S, &Payload) -> Result<S> + Send + Sync + 'static,
    {
        self.insert(action_type, Arc::new(handler));
        self
    }

    /// Register any [`ActionHandler`] implementation for `action_type`.
    pub fn on_handler<H>(mut self, action_type: impl Into<String>, handler: H) -> Self
    where
        H: ActionHandler<S> + 'static,
    {
        self.insert(action_type, Arc::new(handler));
        self
    }

    /// Insert a shared handler, returning the one it replaced.
    pub fn insert(
        &mut self,
        action_type: impl Into<String>,
        handler: Handler<S>,
    ) -> Option<Handler<S>> {
        self.handlers.insert(action_type.into(), handler)
    }

    pub fn get(&self, action_type: &str) -> Option<&Handler<S>> {
        self.handlers.get(action_type)
    }

    pub fn contains(&self, action_type: &str) -> bool {
        self.handlers.contains_key(action_type)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered action types, in no particular order.
    pub fn action_types(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

impl<S> Default for ActionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K: Into<String>> FromIterator<(K, Handler<S>)> for ActionTable<S> {
    fn from_iter<I: IntoIterator<Item = (K, Handler<S>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (action_type, handler) in iter {
            table.insert(action_type, handler);
        }
        table
    }
}

impl<S> fmt::Debug for ActionTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut action_types: Vec<&str> = self.action_types().collect();
        action_types.sort_unstable();
        f.debug_struct("ActionTable")
            .field("action_types", &action_types)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keep(state: &u32, _payload: &Payload) -> Result<u32> {
        Ok(*state)
    }

    #[test]
    fn empty_table() {
        let table: ActionTable<u32> = ActionTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.get("ANY").is_none());
    }

    #[test]
    fn re_registering_replaces_handler() {
        let mut table = ActionTable::new().on("INC", |state: &u32, _: &Payload| Ok(state + 1));
        let replaced = table.insert("INC", Arc::new(keep));

        assert!(replaced.is_some());
        assert_eq!(table.len(), 1);

        let payload = Payload::from(serde_json::json!({"type": "INC"}));
        let next = table.get("INC").unwrap().handle(&1, &payload).unwrap();
        assert_eq!(next, 1);
    }

    #[test]
    fn collects_from_pairs() {
        let table: ActionTable<u32> = vec![
            ("A", Arc::new(keep) as Handler<u32>),
            ("B", Arc::new(keep) as Handler<u32>),
        ]
        .into_iter()
        .collect();

        assert!(table.contains("A"));
        assert!(table.contains("B"));
        assert!(!table.contains("C"));
    }

    #[test]
    fn debug_lists_sorted_action_types() {
        let table = ActionTable::new().on("B", keep).on("A", keep);
        assert_eq!(
            format!("{table:?}"),
            r#"ActionTable { action_types: ["A", "B"] }"#
        );
    }
}
