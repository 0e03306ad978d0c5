//! Analytics — fire-and-forget named events.
//!
//! Delivery is best-effort. `track` never fails and never blocks on I/O;
//! the default sink writes a structured `tracing` record on the `analytics` target.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

pub const GENERATION_SUCCESS: &str = "generation_success";
pub const GENERATION_FAILURE: &str = "generation_failure";
pub const FORM_SUBMISSION: &str = "form_submission";
pub const COPY_ICEBREAKER: &str = "copy_icebreaker";
pub const LOAD_EXAMPLE_DATA: &str = "load_example_data";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub event_name: String,
    pub event_data: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Builds an event stamped with the current time. Non-object data is
    /// wrapped under a `value` key.
    pub fn new(event_name: impl Into<String>, event_data: Value) -> Self {
        let event_data = match event_data {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        Self {
            event_name: event_name.into(),
            event_data,
            timestamp: Utc::now(),
        }
    }
}

/// Destination for analytics events. Implementations must not block.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: AnalyticsEvent);
}

/// Default sink: one structured log line per event.
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn track(&self, event: AnalyticsEvent) {
        let data = Value::Object(event.event_data);
        info!(
            target: "analytics",
            event_name = %event.event_name,
            event_data = %data,
            timestamp = %event.timestamp.to_rfc3339(),
            "analytics event"
        );
    }
}

/// Convenience wrapper: build and send in one call.
pub fn track(sink: &dyn AnalyticsSink, event_name: &str, event_data: Value) {
    sink.track(AnalyticsEvent::new(event_name, event_data));
}
