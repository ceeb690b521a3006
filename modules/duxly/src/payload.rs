//! The message handed to a dispatcher.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::DispatchError;

/// An action payload: a JSON object with a string `type` discriminator plus
/// whatever else the caller put in it. Only `type` is ever read by the
/// dispatcher; the rest is passed through to the handler untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Value);

impl Payload {
    /// Build `{ "type": action_type, "payload": data }`.
    pub fn new(action_type: impl Into<String>, data: Value) -> Self {
        Self(json!({
            "type": action_type.into(),
            "payload": data,
        }))
    }

    /// Serialize a typed action. Enums should use `#[serde(tag = "type")]` so
    /// the variant name lands in the `type` field.
    pub fn from_action<T: Serialize>(action: &T) -> serde_json::Result<Self> {
        serde_json::to_value(action).map(Self)
    }

    /// Deserialize the payload back into a typed action.
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.0)
    }

    /// The lookup key.
    ///
    /// A null payload fails with [`DispatchError::MissingPayload`]. A payload
    /// that is not an object, or has no `type` field, has no key and resolves
    /// to `None`. A `type` that is present but not a string fails with
    /// [`DispatchError::InvalidActionType`].
    pub fn action_type(&self) -> Result<Option<&str>, DispatchError> {
        match &self.0 {
            Value::Null => Err(DispatchError::MissingPayload),
            Value::Object(fields) => match fields.get("type") {
                Some(Value::String(action_type)) => Ok(Some(action_type.as_str())),
                Some(other) => Err(DispatchError::InvalidActionType {
                    found: json_kind(other),
                }),
                None => Ok(None),
            },
            _ => Ok(None),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_flux_standard_shape() {
        let payload = Payload::new("TEST_ACTION", json!(42));
        assert_eq!(
            payload.as_value(),
            &json!({"type": "TEST_ACTION", "payload": 42})
        );
        assert_eq!(payload.action_type().unwrap(), Some("TEST_ACTION"));
    }

    #[test]
    fn null_payload_is_missing() {
        let payload = Payload::from(Value::Null);
        assert!(matches!(
            payload.action_type(),
            Err(DispatchError::MissingPayload)
        ));
    }

    #[test]
    fn non_string_type_reports_its_kind() {
        for (value, kind) in [
            (json!({"type": 7}), "number"),
            (json!({"type": null}), "null"),
            (json!({"type": ["A"]}), "array"),
        ] {
            match Payload::from(value).action_type() {
                Err(DispatchError::InvalidActionType { found }) => assert_eq!(found, kind),
                other => panic!("expected InvalidActionType, got {other:?}"),
            }
        }
    }

    #[test]
    fn absent_type_and_non_object_payloads_have_no_key() {
        for value in [
            json!({}),
            json!({"payload": 1}),
            json!("TEST_ACTION"),
            json!(5),
            json!([1, 2]),
        ] {
            assert_eq!(Payload::from(value).action_type().unwrap(), None);
        }
    }
}
