use std::future::Future;

use aws_config::{BehaviorVersion, Region, SdkConfig};

use crate::core::errors::{ElbTraceError, Result};

/// Resolved AWS configuration plus the runtime the SDK clients run on.
///
/// The CLI is synchronous; adapters hand their SDK futures to `block_on`.
pub struct AwsSession {
    runtime: tokio::runtime::Runtime,
    config: SdkConfig,
}

impl AwsSession {
    /// Resolve credentials and region through the AWS default chain,
    /// with optional profile and region overrides.
    ///
    /// Fails with `ConfigLoadFailure` when no region can be determined,
    /// since every ELB and CloudTrail call is regional.
    pub fn load(profile: Option<&str>, region: Option<&str>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ElbTraceError::ConfigLoadFailure {
                reason: format!("Failed to create async runtime: {e}"),
            })?;

        let config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(profile) = profile {
                loader = loader.profile_name(profile);
            }
            if let Some(region) = region {
                loader = loader.region(Region::new(region.to_string()));
            }
            loader.load().await
        });

        let Some(resolved) = config.region() else {
            return Err(ElbTraceError::ConfigLoadFailure {
                reason: "no AWS region configured".into(),
            });
        };
        tracing::debug!(region = %resolved, profile = ?profile, "AWS configuration loaded");

        Ok(Self { runtime, config })
    }

    /// Session with an empty configuration, for adapters built around a
    /// client that never leaves the process.
    #[cfg(test)]
    pub(crate) fn offline() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("eu-west-1"))
            .build();
        Self { runtime, config }
    }

    pub fn sdk_config(&self) -> &SdkConfig {
        &self.config
    }

    /// Drive an SDK future to completion on the session runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
