/// The two fields of a `CreateNetworkInterface` response that matter here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkInterfaceRecord {
    pub description: String,
    pub private_ip_address: String,
}
