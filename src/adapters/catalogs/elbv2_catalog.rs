use std::sync::Arc;

use aws_sdk_elasticloadbalancingv2::error::DisplayErrorContext;
use aws_sdk_elasticloadbalancingv2::types::{
    LoadBalancer as ElbLoadBalancer, LoadBalancerTypeEnum,
};

use crate::adapters::aws::session::AwsSession;
use crate::core::errors::{ElbTraceError, Result};
use crate::core::models::load_balancer::{LoadBalancer, LoadBalancerKind};
use crate::core::traits::catalog::LoadBalancerCatalog;

/// Lists load balancers with a single ELBv2 `DescribeLoadBalancers` call.
pub struct Elbv2Catalog {
    session: Arc<AwsSession>,
    client: aws_sdk_elasticloadbalancingv2::Client,
}

impl Elbv2Catalog {
    pub fn new(session: Arc<AwsSession>) -> Self {
        let client = aws_sdk_elasticloadbalancingv2::Client::new(session.sdk_config());
        Self::with_client(session, client)
    }

    pub fn with_client(
        session: Arc<AwsSession>,
        client: aws_sdk_elasticloadbalancingv2::Client,
    ) -> Self {
        Self { session, client }
    }
}

impl LoadBalancerCatalog for Elbv2Catalog {
    fn list(&self) -> Result<Vec<LoadBalancer>> {
        let output = self
            .session
            .block_on(self.client.describe_load_balancers().send())
            .map_err(|e| ElbTraceError::CatalogUnavailable {
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        if output.next_marker().is_some() {
            tracing::warn!("DescribeLoadBalancers returned a partial list");
        }

        let balancers: Vec<LoadBalancer> = output
            .load_balancers()
            .iter()
            .filter_map(to_load_balancer)
            .collect();
        tracing::debug!(count = balancers.len(), "load balancers listed");
        Ok(balancers)
    }
}

fn to_load_balancer(lb: &ElbLoadBalancer) -> Option<LoadBalancer> {
    let name = lb.load_balancer_name()?;
    Some(LoadBalancer {
        name: name.to_string(),
        kind: kind_of(lb.r#type()),
    })
}

fn kind_of(t: Option<&LoadBalancerTypeEnum>) -> LoadBalancerKind {
    match t {
        Some(LoadBalancerTypeEnum::Application) => LoadBalancerKind::Application,
        Some(LoadBalancerTypeEnum::Network) => LoadBalancerKind::Network,
        Some(LoadBalancerTypeEnum::Gateway) => LoadBalancerKind::Gateway,
        _ => LoadBalancerKind::Other,
    }
}
