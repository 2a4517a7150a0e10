pub mod audit_event;
pub mod ip_history;
pub mod load_balancer;
pub mod network_interface;
