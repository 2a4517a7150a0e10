use regex::Regex;

use crate::core::errors::{ElbTraceError, Result};
use crate::core::models::load_balancer::LoadBalancerKind;

/// Recognizes network interfaces provisioned for one load balancer.
///
/// ELB describes the interfaces it creates as `ELB <prefix>/<name>/<id>`.
/// The name is escaped before it is placed in the pattern, and the trailing
/// `/` keeps `web-1` from matching interfaces of `web-10`.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    pattern: Option<Regex>,
}

impl NameMatcher {
    /// Matcher for a load balancer of the given kind. Kinds without a known
    /// description prefix produce a matcher that never matches.
    ///
    /// The escaped pattern is a plain literal, so `InvalidPattern` is only
    /// reachable for names far beyond the regex size limit.
    pub fn for_kind(kind: LoadBalancerKind, name: &str) -> Result<Self> {
        let Some(prefix) = kind.interface_prefix() else {
            return Ok(Self { pattern: None });
        };

        let source = format!("ELB {prefix}/{}/", regex::escape(name));
        let pattern = Regex::new(&source).map_err(|e| ElbTraceError::InvalidPattern {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// True if `description` contains the marker anywhere.
    pub fn matches(&self, description: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|p| p.is_match(description))
    }
}
