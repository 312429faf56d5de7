//! NEP-297 event emission.

use near_sdk::env;
use near_sdk::serde::Serialize;
use near_sdk::serde_json::{self, Map, Value, json};

/// Accumulates event fields and emits one `EVENT_JSON:` log line.
pub(crate) struct EventBuilder {
    event: &'static str,
    data: Map<String, Value>,
}

impl EventBuilder {
    pub(crate) fn new(event: &'static str, op: &str) -> Self {
        let mut data = Map::new();
        data.insert("op".to_string(), Value::String(op.to_string()));
        Self { event, data }
    }

    pub(crate) fn field(mut self, key: &str, value: impl Serialize) -> Self {
        // Serialization of event payloads is infallible for the types used
        // at call sites; fall back to null rather than aborting the call.
        let value = serde_json::to_value(&value).unwrap_or(Value::Null);
        self.data.insert(key.to_string(), value);
        self
    }

    pub(crate) fn emit(self) {
        let envelope = json!({
            "standard": super::STANDARD,
            "version": super::VERSION,
            "event": self.event,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", super::PREFIX, envelope));
    }
}
