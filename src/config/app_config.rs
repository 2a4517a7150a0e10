use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{ElbTraceError, Result};

/// Upper bound on CloudTrail pages a single trace may read.
pub const MAX_PAGES_LIMIT: u32 = 100;

/// Top-level configuration read from `config.toml`.
///
/// Every section is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub aws: AwsSection,
    pub trace: TraceSection,
    pub catalog: CatalogSection,
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. The default path
    /// (`<config dir>/elbtrace/config.toml`) is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    return Err(ElbTraceError::InvalidConfig {
                        detail: format!("config file not found: {}", p.display()),
                    });
                }
                p.to_path_buf()
            }
            None => match default_path() {
                Some(p) if p.exists() => p,
                _ => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content).map_err(|e| match e {
            ElbTraceError::InvalidConfig { detail } => ElbTraceError::InvalidConfig {
                detail: format!("{}: {detail}", path.display()),
            },
            other => other,
        })
    }

    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ElbTraceError::InvalidConfig {
            detail: format!("Failed to parse config.toml: {e}"),
        })?;
        validate_max_pages(config.trace.max_pages)?;
        Ok(config)
    }
}

/// `<config dir>/elbtrace/config.toml`, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("elbtrace").join("config.toml"))
}

/// Reject page counts outside `1..=MAX_PAGES_LIMIT`.
pub fn validate_max_pages(pages: u32) -> Result<()> {
    if pages == 0 || pages > MAX_PAGES_LIMIT {
        return Err(ElbTraceError::InvalidConfig {
            detail: format!("max_pages must be between 1 and {MAX_PAGES_LIMIT}, got {pages}"),
        });
    }
    Ok(())
}

/// The `[aws]` section. Unset values fall through to the AWS default chain.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AwsSection {
    pub profile: Option<String>,
    pub region: Option<String>,
}

/// The `[trace]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TraceSection {
    /// CloudTrail pages to read per trace. 1 reproduces a single lookup.
    pub max_pages: u32,
    pub sort_by_time: bool,
}

impl Default for TraceSection {
    fn default() -> Self {
        Self {
            max_pages: 1,
            sort_by_time: false,
        }
    }
}

/// The `[catalog]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// List network and gateway load balancers as well.
    pub all_kinds: bool,
}
