use serde::{Deserialize, Serialize};

use crate::HostRef;

/// A compute node registered in a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostInstance {
    /// Platform-layer reference (container instance ARN).
    pub host_ref: HostRef,
    /// Infrastructure-level id used to address the node (EC2 instance id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
}
