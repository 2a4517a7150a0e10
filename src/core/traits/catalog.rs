use crate::core::errors::Result;
use crate::core::models::load_balancer::LoadBalancer;

/// Port for enumerating load balancers.
pub trait LoadBalancerCatalog: Send + Sync {
    /// List every load balancer visible to the caller, in API order.
    fn list(&self) -> Result<Vec<LoadBalancer>>;
}
