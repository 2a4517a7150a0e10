use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};

use crate::adapters::aws::session::AwsSession;
use crate::cli::Cli;
use crate::config::app_config::{self, AppConfig};
use crate::core::errors::{ElbTraceError, Result};

/// Settings for one invocation: config file values with CLI overrides applied.
#[derive(Debug)]
pub struct RunContext {
    pub config: AppConfig,
    profile: Option<String>,
    region: Option<String>,
}

impl RunContext {
    pub fn from_args(args: &Cli) -> Result<Self> {
        let config = AppConfig::load(args.config.as_deref())?;
        let profile = args.profile.clone().or_else(|| config.aws.profile.clone());
        let region = args.region.clone().or_else(|| config.aws.region.clone());
        Ok(Self {
            config,
            profile,
            region,
        })
    }

    /// Load AWS configuration. Each call resolves credentials afresh.
    pub fn aws_session(&self) -> Result<Arc<AwsSession>> {
        AwsSession::load(self.profile.as_deref(), self.region.as_deref()).map(Arc::new)
    }

    /// Page limit from the flag, falling back to the config file.
    pub fn max_pages(&self, flag: Option<u32>) -> Result<u32> {
        let pages = flag.unwrap_or(self.config.trace.max_pages);
        app_config::validate_max_pages(pages)?;
        Ok(pages)
    }
}

/// Validate a load balancer name given on the command line.
///
/// The name is matched literally, so it is never rewritten here.
pub fn validate_lb_name(name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        return Err(ElbTraceError::InvalidConfig {
            detail: "load balancer name must not be empty.\n  \
                     Run 'elbtrace list' to see available names."
                .into(),
        });
    }
    if name.trim() != name {
        return Err(ElbTraceError::InvalidConfig {
            detail: format!(
                "load balancer name '{name}' has leading or trailing whitespace.\n  \
                 Load balancer names never contain spaces."
            ),
        });
    }
    Ok(name)
}

/// Parse a date string (ISO 8601: `YYYY-MM-DD`) into a UTC DateTime.
pub fn parse_since(s: &str) -> Result<chrono::DateTime<Utc>> {
    let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") else {
        return Err(ElbTraceError::InvalidConfig {
            detail: format!(
                "Invalid date format: '{s}'. Expected ISO 8601 (YYYY-MM-DD), e.g. 2026-01-15"
            ),
        });
    };
    Ok(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_lb_name("").is_err());
        assert!(validate_lb_name("   ").is_err());
    }

    #[test]
    fn surrounding_whitespace_is_rejected() {
        assert!(validate_lb_name(" svc-alb").is_err());
        assert!(validate_lb_name("svc-alb\n").is_err());
    }

    #[test]
    fn valid_name_is_returned_unchanged() {
        assert_eq!(validate_lb_name("svc-alb").unwrap(), "svc-alb");
    }

    #[test]
    fn since_parses_to_midnight_utc() {
        let dt = parse_since("2026-01-15").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn since_rejects_other_formats() {
        assert!(parse_since("15/01/2026").is_err());
        assert!(parse_since("2026-13-01").is_err());
    }
}
