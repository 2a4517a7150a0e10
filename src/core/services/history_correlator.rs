use chrono::{DateTime, Utc};

use crate::core::errors::Result;
use crate::core::models::audit_event::EventQuery;
use crate::core::models::ip_history::IpHistoryEntry;
use crate::core::models::load_balancer::LoadBalancerKind;
use crate::core::services::name_matcher::NameMatcher;
use crate::core::services::payload_decoder::AuditPayloadDecoder;
use crate::core::traits::event_source::AuditEventSource;

/// Rebuilds the private IP history of a load balancer from audit events.
///
/// One call issues exactly one query against the source and walks the
/// returned events in order. Entries keep source order; nothing is sorted,
/// deduplicated or fabricated here.
pub struct HistoryCorrelator<'a> {
    source: &'a dyn AuditEventSource,
    decoder: AuditPayloadDecoder,
    kind: LoadBalancerKind,
    since: Option<DateTime<Utc>>,
}

impl<'a> HistoryCorrelator<'a> {
    /// Correlator for application load balancers over the whole history
    /// the source returns.
    pub fn new(source: &'a dyn AuditEventSource) -> Self {
        Self {
            source,
            decoder: AuditPayloadDecoder,
            kind: LoadBalancerKind::Application,
            since: None,
        }
    }

    /// Match interfaces of another load balancer kind.
    pub fn kind(mut self, kind: LoadBalancerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Ask the source for events at or after `since` only.
    pub fn since(mut self, since: Option<DateTime<Utc>>) -> Self {
        self.since = since;
        self
    }

    /// History of the load balancer `name`.
    ///
    /// A payload that fails to decode aborts the whole lookup: the source
    /// cannot tell a corrupt record from a non-matching one.
    ///
    /// `InvalidPattern` from the matcher cannot occur for real ELB names
    /// (at most 32 characters); only the source and decoder errors surface
    /// in practice.
    pub fn find_history(&self, name: &str) -> Result<Vec<IpHistoryEntry>> {
        let matcher = NameMatcher::for_kind(self.kind, name)?;
        let events = self
            .source
            .query(&EventQuery::network_interface_created(self.since))?;

        let mut entries = Vec::new();
        for event in &events {
            let record = self.decoder.decode(&event.payload)?;
            if !matcher.matches(&record.description) {
                continue;
            }

            tracing::debug!(
                load_balancer = name,
                ip = %record.private_ip_address,
                time = ?event.event_time,
                "matched interface creation"
            );
            entries.push(IpHistoryEntry {
                event_time: event.event_time,
                private_ip_address: record.private_ip_address,
            });
        }

        tracing::info!(
            load_balancer = name,
            source = self.source.name(),
            scanned = events.len(),
            matched = entries.len(),
            "correlation finished"
        );

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ElbTraceError;
    use crate::core::models::audit_event::{CREATE_NETWORK_INTERFACE, RawAuditEvent};
    use chrono::TimeZone;
    use proptest::prelude::*;
    use std::sync::Mutex;

    /// In-memory source that records the queries it receives.
    struct StubSource {
        events: Vec<RawAuditEvent>,
        fail: bool,
        queries: Mutex<Vec<EventQuery>>,
    }

    impl StubSource {
        fn with(events: Vec<RawAuditEvent>) -> Self {
            Self {
                events,
                fail: false,
                queries: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                events: Vec::new(),
                fail: true,
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    impl AuditEventSource for StubSource {
        fn query(&self, query: &EventQuery) -> Result<Vec<RawAuditEvent>> {
            self.queries.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(ElbTraceError::AuditSourceUnavailable {
                    reason: "connection reset by peer".into(),
                });
            }
            Ok(self.events.clone())
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn at(hour: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2026, 10, 6, hour, 0, 0).unwrap())
    }

    fn event(time: Option<DateTime<Utc>>, description: &str, ip: &str) -> RawAuditEvent {
        RawAuditEvent {
            event_time: time,
            payload: serde_json::json!({
                "responseElements": {
                    "networkInterface": {
                        "description": description,
                        "privateIpAddress": ip
                    }
                }
            })
            .to_string(),
        }
    }

    #[test]
    fn returns_only_matching_events() {
        let source = StubSource::with(vec![
            event(at(1), "ELB app/svc-alb/abcd123", "10.0.0.5"),
            event(at(2), "ELB app/other-alb/ffff", "10.0.0.9"),
        ]);
        let history = HistoryCorrelator::new(&source)
            .find_history("svc-alb")
            .unwrap();

        assert_eq!(
            history,
            vec![IpHistoryEntry {
                event_time: at(1),
                private_ip_address: "10.0.0.5".into(),
            }]
        );
    }

    #[test]
    fn no_events_is_empty_not_error() {
        let source = StubSource::with(vec![]);
        let history = HistoryCorrelator::new(&source)
            .find_history("svc-alb")
            .unwrap();

        assert!(history.is_empty());
    }

    #[test]
    fn source_failure_propagates() {
        let source = StubSource::failing();
        let err = HistoryCorrelator::new(&source)
            .find_history("svc-alb")
            .unwrap_err();

        assert!(matches!(err, ElbTraceError::AuditSourceUnavailable { .. }));
    }

    #[test]
    fn decode_failure_aborts_without_partial_result() {
        let source = StubSource::with(vec![
            event(at(1), "ELB app/svc-alb/abcd123", "10.0.0.5"),
            RawAuditEvent {
                event_time: at(2),
                payload: "{\"responseElements\":{}}".into(),
            },
            event(at(3), "ELB app/svc-alb/abcd123", "10.0.0.6"),
        ]);
        let result = HistoryCorrelator::new(&source).find_history("svc-alb");

        assert!(matches!(
            result,
            Err(ElbTraceError::PayloadDecodeError { .. })
        ));
    }

    #[test]
    fn preserves_source_order() {
        let source = StubSource::with(vec![
            event(at(9), "ELB app/svc/1", "10.0.0.9"),
            event(at(1), "ELB app/svc/1", "10.0.0.1"),
            event(at(5), "ELB app/svc/1", "10.0.0.5"),
        ]);
        let history = HistoryCorrelator::new(&source).find_history("svc").unwrap();

        let ips: Vec<&str> = history
            .iter()
            .map(|e| e.private_ip_address.as_str())
            .collect();
        assert_eq!(ips, ["10.0.0.9", "10.0.0.1", "10.0.0.5"]);
    }

    #[test]
    fn keeps_repeated_addresses() {
        let source = StubSource::with(vec![
            event(at(1), "ELB app/svc/1", "10.0.0.5"),
            event(at(2), "ELB app/svc/1", "10.0.0.5"),
        ]);
        let history = HistoryCorrelator::new(&source).find_history("svc").unwrap();

        assert_eq!(history.len(), 2);
    }

    #[test]
    fn missing_ip_still_matches_on_description() {
        let source = StubSource::with(vec![RawAuditEvent {
            event_time: at(4),
            payload: r#"{"responseElements":{"networkInterface":{"description":"ELB app/svc/1"}}}"#
                .into(),
        }]);
        let history = HistoryCorrelator::new(&source).find_history("svc").unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].private_ip_address, "");
        assert_eq!(history[0].event_time, at(4));
    }

    #[test]
    fn missing_event_time_is_carried_through() {
        let source = StubSource::with(vec![event(None, "ELB app/svc/1", "10.0.0.5")]);
        let history = HistoryCorrelator::new(&source).find_history("svc").unwrap();

        assert_eq!(history[0].event_time, None);
    }

    #[test]
    fn issues_one_fixed_query() {
        let source = StubSource::with(vec![]);
        let since = at(0);
        HistoryCorrelator::new(&source)
            .since(since)
            .find_history("svc")
            .unwrap();

        let queries = source.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].event_name, CREATE_NETWORK_INTERFACE);
        assert_eq!(queries[0].since, since);
    }

    #[test]
    fn network_kind_matches_net_descriptions() {
        let source = StubSource::with(vec![
            event(at(1), "ELB net/edge/1", "10.1.0.4"),
            event(at(2), "ELB app/edge/1", "10.1.0.5"),
        ]);
        let history = HistoryCorrelator::new(&source)
            .kind(LoadBalancerKind::Network)
            .find_history("edge")
            .unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].private_ip_address, "10.1.0.4");
    }

    proptest! {
        #[test]
        fn output_length_equals_match_count(flags in proptest::collection::vec(any::<bool>(), 0..40)) {
            let events: Vec<RawAuditEvent> = flags
                .iter()
                .enumerate()
                .map(|(i, &own)| {
                    let owner = if own { "svc" } else { "svc2" };
                    event(None, &format!("ELB app/{owner}/{i:x}"), &format!("10.0.0.{i}"))
                })
                .collect();
            let source = StubSource::with(events);
            let history = HistoryCorrelator::new(&source).find_history("svc").unwrap();

            let expected: Vec<String> = flags
                .iter()
                .enumerate()
                .filter(|(_, own)| **own)
                .map(|(i, _)| format!("10.0.0.{i}"))
                .collect();
            let actual: Vec<String> = history.into_iter().map(|e| e.private_ip_address).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
