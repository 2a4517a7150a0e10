/// All domain errors for elbtrace.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum ElbTraceError {
    #[error(
        "Could not load AWS configuration: {reason}\n\n  \
         Solutions:\n    \
         → Set a region: --region eu-west-1 (or AWS_REGION)\n    \
         → Pick a profile: --profile <name> (or AWS_PROFILE)\n    \
         → Check ~/.aws/config and ~/.aws/credentials"
    )]
    ConfigLoadFailure { reason: String },

    #[error(
        "Audit event query failed: {reason}\n\n  \
         Check your credentials and that cloudtrail:LookupEvents is allowed,\n  \
         or that the --events-file export is readable."
    )]
    AuditSourceUnavailable { reason: String },

    #[error(
        "Malformed audit event payload: {reason}\n\n  \
         Expected a JSON object with responseElements.networkInterface.\n  \
         No partial history was produced."
    )]
    PayloadDecodeError { reason: String },

    #[error(
        "Could not list load balancers: {reason}\n\n  \
         Check your credentials and that elasticloadbalancing:DescribeLoadBalancers is allowed."
    )]
    CatalogUnavailable { reason: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Cannot build a matcher for load balancer '{name}': {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("Terminal prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ElbTraceError>;
