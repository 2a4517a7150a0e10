use chrono::{DateTime, Utc};
use serde::Serialize;

/// A point in time at which a load balancer's interface received an address.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpHistoryEntry {
    pub event_time: Option<DateTime<Utc>>,
    pub private_ip_address: String,
}

/// Sort entries by ascending event time. Entries without a time come first;
/// ties keep their original relative order.
pub fn sort_by_time(entries: &mut [IpHistoryEntry]) {
    entries.sort_by_key(|e| e.event_time);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(hour: Option<u32>, ip: &str) -> IpHistoryEntry {
        IpHistoryEntry {
            event_time: hour.map(|h| Utc.with_ymd_and_hms(2026, 3, 1, h, 0, 0).unwrap()),
            private_ip_address: ip.to_string(),
        }
    }

    #[test]
    fn sorts_ascending_with_missing_times_first() {
        let mut entries = vec![
            entry(Some(9), "10.0.0.3"),
            entry(None, "10.0.0.9"),
            entry(Some(1), "10.0.0.1"),
        ];
        sort_by_time(&mut entries);

        let ips: Vec<&str> = entries
            .iter()
            .map(|e| e.private_ip_address.as_str())
            .collect();
        assert_eq!(ips, ["10.0.0.9", "10.0.0.1", "10.0.0.3"]);
    }

    #[test]
    fn sort_is_stable_for_equal_times() {
        let mut entries = vec![entry(Some(5), "10.0.0.7"), entry(Some(5), "10.0.0.8")];
        sort_by_time(&mut entries);

        assert_eq!(entries[0].private_ip_address, "10.0.0.7");
        assert_eq!(entries[1].private_ip_address, "10.0.0.8");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&entry(Some(0), "10.0.0.5")).unwrap();
        assert!(json.contains("\"eventTime\":\"2026-03-01T00:00:00Z\""));
        assert!(json.contains("\"privateIpAddress\":\"10.0.0.5\""));
    }
}
