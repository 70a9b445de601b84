use serde::{Deserialize, Serialize};

use crate::{HostRef, TaskArn};

/// A running task as returned by the task resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskHandle {
    /// Task identifier (ARN).
    pub arn: TaskArn,
    /// Reference of the host instance the task is placed on.
    pub host_ref: HostRef,
}

/// One container of a described task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInfo {
    pub name: String,
    /// Docker runtime id; `None` until the agent has reported it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_id: Option<String>,
}

impl ContainerInfo {
    pub fn new(name: impl Into<String>, runtime_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runtime_id: Some(runtime_id.into()),
        }
    }
}

/// Full description of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetails {
    pub arn: TaskArn,
    /// `None` for tasks without an EC2 container instance (Fargate).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_ref: Option<HostRef>,
    #[serde(default)]
    pub containers: Vec<ContainerInfo>,
}

impl TaskDetails {
    /// First container whose name equals `name` exactly.
    pub fn container(&self, name: &str) -> Option<&ContainerInfo> {
        self.containers.iter().find(|c| c.name == name)
    }
}
