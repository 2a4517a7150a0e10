use serde_json::Value;

use crate::core::errors::{ElbTraceError, Result};
use crate::core::models::network_interface::NetworkInterfaceRecord;

/// Decodes CloudTrail `CreateNetworkInterface` records.
///
/// Strict on structure, lenient on leaves: the payload must be a JSON object
/// holding a `responseElements.networkInterface` object, but a missing or
/// non-string `description` / `privateIpAddress` decodes to `""`.
pub struct AuditPayloadDecoder;

impl AuditPayloadDecoder {
    pub fn decode(&self, payload: &str) -> Result<NetworkInterfaceRecord> {
        let value: Value =
            serde_json::from_str(payload).map_err(|e| ElbTraceError::PayloadDecodeError {
                reason: format!("invalid JSON: {e}"),
            })?;

        if !value.is_object() {
            return Err(ElbTraceError::PayloadDecodeError {
                reason: "payload is not a JSON object".into(),
            });
        }

        let interface = value
            .get("responseElements")
            .filter(|v| v.is_object())
            .ok_or_else(|| ElbTraceError::PayloadDecodeError {
                reason: "missing responseElements object".into(),
            })?
            .get("networkInterface")
            .filter(|v| v.is_object())
            .ok_or_else(|| ElbTraceError::PayloadDecodeError {
                reason: "missing responseElements.networkInterface object".into(),
            })?;

        Ok(NetworkInterfaceRecord {
            description: leaf(interface, "description"),
            private_ip_address: leaf(interface, "privateIpAddress"),
        })
    }
}

fn leaf(obj: &Value, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
