use crate::core::errors::Result;
use crate::core::models::audit_event::{EventQuery, RawAuditEvent};

/// Port for reading audit events.
///
/// Implementations live in `adapters::event_sources` (CloudTrail, JSON export).
/// The result may be a single page of a longer history; callers must not
/// assume completeness.
pub trait AuditEventSource: Send + Sync {
    /// Run one query. Fails with `AuditSourceUnavailable` when the query
    /// itself cannot be executed.
    fn query(&self, query: &EventQuery) -> Result<Vec<RawAuditEvent>>;

    /// Human-readable name of this source (e.g. "cloudtrail").
    fn name(&self) -> &str;
}
