use std::fmt;
use std::str::FromStr;

use crate::core::errors::{ElbTraceError, Result};

/// Load balancer types as reported by the ELBv2 API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadBalancerKind {
    Application,
    Network,
    Gateway,
    Other,
}

impl LoadBalancerKind {
    /// Token that ELB writes into the description of the network interfaces
    /// it provisions, e.g. `ELB app/<name>/<id>`.
    ///
    /// Returns `None` for kinds whose interfaces carry no known marker.
    pub fn interface_prefix(self) -> Option<&'static str> {
        match self {
            Self::Application => Some("app"),
            Self::Network => Some("net"),
            Self::Gateway => Some("gwy"),
            Self::Other => None,
        }
    }
}

impl fmt::Display for LoadBalancerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Application => "application",
            Self::Network => "network",
            Self::Gateway => "gateway",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

impl FromStr for LoadBalancerKind {
    type Err = ElbTraceError;

    /// Accepts both the long names and the short description tokens.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "app" | "application" => Ok(Self::Application),
            "net" | "network" => Ok(Self::Network),
            "gwy" | "gateway" => Ok(Self::Gateway),
            other => Err(ElbTraceError::InvalidConfig {
                detail: format!(
                    "Unknown load balancer kind '{other}'. Expected one of: app, net, gwy"
                ),
            }),
        }
    }
}

/// One entry of the load balancer catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancer {
    pub name: String,
    pub kind: LoadBalancerKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!(
            "app".parse::<LoadBalancerKind>().unwrap(),
            LoadBalancerKind::Application
        );
        assert_eq!(
            "Network".parse::<LoadBalancerKind>().unwrap(),
            LoadBalancerKind::Network
        );
        assert_eq!(
            "gwy".parse::<LoadBalancerKind>().unwrap(),
            LoadBalancerKind::Gateway
        );
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "classic".parse::<LoadBalancerKind>().unwrap_err();
        assert!(matches!(err, ElbTraceError::InvalidConfig { .. }));
    }

    #[test]
    fn other_kind_has_no_prefix() {
        assert_eq!(LoadBalancerKind::Other.interface_prefix(), None);
        assert_eq!(
            LoadBalancerKind::Application.interface_prefix(),
            Some("app")
        );
    }
}
