use serde::{Deserialize, Serialize};

use crate::{ClusterRef, ContainerName, ServiceRef};

/// What the user asked to connect to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    #[serde(default)]
    pub cluster: ClusterRef,
    pub service: ServiceRef,
    pub container: ContainerName,
}

impl ConnectRequest {
    pub fn new(cluster: ClusterRef, service: ServiceRef, container: ContainerName) -> Self {
        Self {
            cluster,
            service,
            container,
        }
    }
}
