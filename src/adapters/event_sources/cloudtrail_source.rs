use std::sync::Arc;

use aws_sdk_cloudtrail::error::DisplayErrorContext;
use aws_sdk_cloudtrail::primitives::DateTime as AwsDateTime;
use aws_sdk_cloudtrail::types::{Event, LookupAttribute, LookupAttributeKey};
use chrono::{DateTime, Utc};

use crate::adapters::aws::session::AwsSession;
use crate::core::errors::{ElbTraceError, Result};
use crate::core::models::audit_event::{EventQuery, RawAuditEvent};
use crate::core::traits::event_source::AuditEventSource;

/// Largest page `LookupEvents` will return.
const PAGE_SIZE: i32 = 50;

/// Reads management events through CloudTrail `LookupEvents`.
///
/// Reads `max_pages` pages at most. With the default of one page, long-lived
/// load balancers may show an incomplete history.
pub struct CloudTrailEventSource {
    session: Arc<AwsSession>,
    client: aws_sdk_cloudtrail::Client,
    max_pages: u32,
}

impl CloudTrailEventSource {
    pub fn new(session: Arc<AwsSession>, max_pages: u32) -> Self {
        let client = aws_sdk_cloudtrail::Client::new(session.sdk_config());
        Self::with_client(session, client, max_pages)
    }

    pub fn with_client(
        session: Arc<AwsSession>,
        client: aws_sdk_cloudtrail::Client,
        max_pages: u32,
    ) -> Self {
        Self {
            session,
            client,
            max_pages: max_pages.max(1),
        }
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }
}

impl AuditEventSource for CloudTrailEventSource {
    fn query(&self, query: &EventQuery) -> Result<Vec<RawAuditEvent>> {
        let attribute = LookupAttribute::builder()
            .attribute_key(LookupAttributeKey::EventName)
            .attribute_value(&query.event_name)
            .build()
            .map_err(|e| ElbTraceError::AuditSourceUnavailable {
                reason: format!("Invalid lookup attribute: {e}"),
            })?;
        let start_time = query.since.map(|t| AwsDateTime::from_secs(t.timestamp()));

        self.session.block_on(async {
            let mut events = Vec::new();
            let mut next_token: Option<String> = None;

            for page in 1..=self.max_pages {
                let output = self
                    .client
                    .lookup_events()
                    .lookup_attributes(attribute.clone())
                    .set_start_time(start_time)
                    .max_results(PAGE_SIZE)
                    .set_next_token(next_token.take())
                    .send()
                    .await
                    .map_err(|e| ElbTraceError::AuditSourceUnavailable {
                        reason: DisplayErrorContext(&e).to_string(),
                    })?;

                tracing::debug!(page, events = output.events().len(), "LookupEvents page");
                events.extend(output.events().iter().map(to_raw_event));

                next_token = output.next_token().map(str::to_string);
                if next_token.is_none() {
                    break;
                }
            }

            if next_token.is_some() {
                tracing::warn!(
                    pages = self.max_pages,
                    "more CloudTrail events exist beyond the page limit"
                );
            }

            Ok(events)
        })
    }

    fn name(&self) -> &str {
        "cloudtrail"
    }
}

/// A missing `CloudTrailEvent` becomes an empty payload so that decoding
/// fails instead of the event being silently dropped.
fn to_raw_event(event: &Event) -> RawAuditEvent {
    RawAuditEvent {
        event_time: event.event_time().and_then(to_chrono),
        payload: event.cloud_trail_event().unwrap_or_default().to_string(),
    }
}

fn to_chrono(t: &AwsDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(t.secs(), t.subsec_nanos())
}
