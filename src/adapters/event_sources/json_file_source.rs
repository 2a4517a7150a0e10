use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use crate::core::errors::{ElbTraceError, Result};
use crate::core::models::audit_event::{EventQuery, RawAuditEvent};
use crate::core::traits::event_source::AuditEventSource;

/// Reads events from the JSON printed by `aws cloudtrail lookup-events`.
///
/// Lets an operator trace against an exported log without live credentials.
/// Filtering happens locally and file order is preserved.
pub struct JsonFileEventSource {
    path: PathBuf,
}

/// Top-level shape of a `lookup-events` export.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LookupEventsExport {
    #[serde(default)]
    events: Vec<ExportedEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ExportedEvent {
    event_name: Option<String>,
    event_time: Option<ExportedTime>,
    cloud_trail_event: Option<String>,
}

/// AWS CLI v2 prints ISO 8601 timestamps, v1 prints epoch seconds.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExportedTime {
    Iso(DateTime<FixedOffset>),
    Epoch(f64),
}

impl ExportedTime {
    fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Iso(t) => Some(t.with_timezone(&Utc)),
            Self::Epoch(secs) => {
                let whole = secs.trunc();
                let nanos = ((secs - whole) * 1e9).round() as u32;
                DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
            }
        }
    }
}

impl JsonFileEventSource {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl AuditEventSource for JsonFileEventSource {
    fn query(&self, query: &EventQuery) -> Result<Vec<RawAuditEvent>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ElbTraceError::AuditSourceUnavailable {
                reason: format!("Cannot read {}: {e}", self.path.display()),
            }
        })?;
        let export: LookupEventsExport =
            serde_json::from_str(&content).map_err(|e| ElbTraceError::AuditSourceUnavailable {
                reason: format!("{} is not a lookup-events export: {e}", self.path.display()),
            })?;

        let total = export.events.len();
        let events: Vec<RawAuditEvent> = export
            .events
            .into_iter()
            .filter(|e| {
                e.event_name
                    .as_deref()
                    .is_none_or(|name| name == query.event_name)
            })
            .map(|e| RawAuditEvent {
                event_time: e.event_time.as_ref().and_then(ExportedTime::to_utc),
                payload: e.cloud_trail_event.unwrap_or_default(),
            })
            .filter(|e| match query.since {
                Some(since) => e.event_time.is_some_and(|t| t >= since),
                None => true,
            })
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            total,
            kept = events.len(),
            "read exported events"
        );
        Ok(events)
    }

    fn name(&self) -> &str {
        "json-file"
    }
}
