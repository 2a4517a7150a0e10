use chrono::{DateTime, Utc};

/// CloudTrail event name recorded when ENIs are provisioned.
pub const CREATE_NETWORK_INTERFACE: &str = "CreateNetworkInterface";

/// One audit event as returned by an event source, payload still undecoded.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAuditEvent {
    /// Time reported by the source. `None` when the source omitted it.
    pub event_time: Option<DateTime<Utc>>,
    /// JSON-encoded CloudTrail record.
    pub payload: String,
}

/// Filter handed to an `AuditEventSource`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventQuery {
    pub event_name: String,
    /// Only return events at or after this instant.
    pub since: Option<DateTime<Utc>>,
}

impl EventQuery {
    /// Query for network-interface creation events.
    pub fn network_interface_created(since: Option<DateTime<Utc>>) -> Self {
        Self {
            event_name: CREATE_NETWORK_INTERFACE.to_string(),
            since,
        }
    }
}
