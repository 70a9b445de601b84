use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ecs::types::DesiredStatus;
use tracing::trace;

use dock_core::{ControlPlane, ControlPlaneError};
use dock_model::{CallerIdentity, ClusterRef, HostInstance, ServiceRef, TaskArn, TaskDetails};

use crate::{convert, errors::sdk_error};

/// [`ControlPlane`] backed by the ECS and STS APIs.
#[derive(Clone, Debug)]
pub struct EcsControlPlane {
    ecs: aws_sdk_ecs::Client,
    sts: aws_sdk_sts::Client,
}

impl EcsControlPlane {
    pub fn new(sdk: &SdkConfig) -> Self {
        Self {
            ecs: aws_sdk_ecs::Client::new(sdk),
            sts: aws_sdk_sts::Client::new(sdk),
        }
    }
}

/// Empty cluster names are left out so ECS applies its default cluster.
fn cluster_param(cluster: &ClusterRef) -> Option<String> {
    (!cluster.is_default()).then(|| cluster.as_str().to_string())
}

#[async_trait]
impl ControlPlane for EcsControlPlane {
    async fn caller_identity(&self) -> Result<CallerIdentity, ControlPlaneError> {
        let out = self
            .sts
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| sdk_error("GetCallerIdentity", e))?;
        Ok(convert::caller_identity(&out))
    }

    async fn list_running_tasks(
        &self,
        cluster: &ClusterRef,
        service: &ServiceRef,
    ) -> Result<Vec<TaskArn>, ControlPlaneError> {
        trace!(target: "dock.aws.ecs", %cluster, %service, "ListTasks");
        let out = self
            .ecs
            .list_tasks()
            .set_cluster(cluster_param(cluster))
            .service_name(service.as_str())
            .desired_status(DesiredStatus::Running)
            .send()
            .await
            .map_err(|e| sdk_error("ListTasks", e))?;
        Ok(out.task_arns().to_vec())
    }

    async fn describe_task(
        &self,
        cluster: &ClusterRef,
        task: &str,
    ) -> Result<Option<TaskDetails>, ControlPlaneError> {
        trace!(target: "dock.aws.ecs", %cluster, task, "DescribeTasks");
        let out = self
            .ecs
            .describe_tasks()
            .set_cluster(cluster_param(cluster))
            .tasks(task)
            .send()
            .await
            .map_err(|e| sdk_error("DescribeTasks", e))?;
        Ok(out.tasks().first().map(|t| convert::task_details(t, task)))
    }

    async fn describe_host_instances(
        &self,
        cluster: &ClusterRef,
        host_ref: &str,
    ) -> Result<Vec<HostInstance>, ControlPlaneError> {
        trace!(target: "dock.aws.ecs", %cluster, host_ref, "DescribeContainerInstances");
        let out = self
            .ecs
            .describe_container_instances()
            .set_cluster(cluster_param(cluster))
            .container_instances(host_ref)
            .send()
            .await
            .map_err(|e| sdk_error("DescribeContainerInstances", e))?;
        Ok(out
            .container_instances()
            .iter()
            .map(|i| convert::host_instance(i, host_ref))
            .collect())
    }
}
