//! Resolution of a service/container pair down to a [`SessionTarget`].
//!
//! Each step talks to the control plane afresh; nothing is cached between
//! steps or between attempts.

use tracing::{debug, info, instrument, warn};

use dock_model::{ClusterRef, ConnectRequest, ContainerName, ServiceRef, SessionTarget, TaskHandle};

use crate::{
    error::AttemptError,
    plane::ControlPlane,
    select::{Selector, pick_uniform},
};

pub struct Resolver<'a> {
    plane: &'a dyn ControlPlane,
    selector: &'a dyn Selector,
}

impl<'a> Resolver<'a> {
    pub fn new(plane: &'a dyn ControlPlane, selector: &'a dyn Selector) -> Self {
        Self { plane, selector }
    }

    /// Pick one running task of `service` and return it with its host reference.
    #[instrument(level = "debug", skip_all, fields(cluster = %cluster, service = %service))]
    pub async fn resolve_task(
        &self,
        cluster: &ClusterRef,
        service: &ServiceRef,
    ) -> Result<TaskHandle, AttemptError> {
        let arns = match self.plane.list_running_tasks(cluster, service).await {
            Ok(arns) => arns,
            Err(e) => {
                warn!(target: "dock.core.resolve", error = %e, "listing tasks failed");
                Vec::new()
            }
        };
        debug!(target: "dock.core.resolve", count = arns.len(), "running tasks listed");

        let arn = pick_uniform(&arns, self.selector).ok_or_else(|| {
            AttemptError::NoRunningTasks {
                service: service.to_string(),
            }
        })?;

        let details = self
            .plane
            .describe_task(cluster, arn)
            .await
            .map_err(|e| describe_failed(arn, e.to_string()))?
            .ok_or_else(|| describe_failed(arn, "no task returned"))?;

        let host_ref = details
            .host_ref
            .ok_or_else(|| describe_failed(arn, "task is not placed on a container instance"))?;

        Ok(TaskHandle {
            arn: arn.clone(),
            host_ref,
        })
    }

    /// Turn a container-instance reference into the EC2 instance id behind it.
    ///
    /// `host_ref` names a single instance, so more than one result is not expected;
    /// the random pick mirrors the task step and is likely redundant.
    #[instrument(level = "debug", skip_all, fields(cluster = %cluster, host_ref = %host_ref))]
    pub async fn resolve_host(
        &self,
        cluster: &ClusterRef,
        host_ref: &str,
    ) -> Result<String, AttemptError> {
        let no_hosts = || AttemptError::NoHostInstances {
            cluster: cluster.to_string(),
            host_ref: host_ref.to_string(),
        };

        let instances = match self.plane.describe_host_instances(cluster, host_ref).await {
            Ok(instances) => instances,
            Err(e) => {
                warn!(target: "dock.core.resolve", error = %e, "describing container instance failed");
                Vec::new()
            }
        };

        let instance = pick_uniform(&instances, self.selector).ok_or_else(no_hosts)?;
        instance.instance_id.clone().ok_or_else(no_hosts)
    }

    /// Runtime id of the first container of `task` named exactly `container`.
    ///
    /// Re-describes the task instead of reusing the description from
    /// [`Resolver::resolve_task`].
    #[instrument(level = "debug", skip_all, fields(cluster = %cluster, task = %task, container = %container))]
    pub async fn resolve_container(
        &self,
        cluster: &ClusterRef,
        task: &str,
        container: &ContainerName,
    ) -> Result<String, AttemptError> {
        let details = self
            .plane
            .describe_task(cluster, task)
            .await
            .map_err(|e| describe_failed(task, e.to_string()))?
            .ok_or_else(|| describe_failed(task, "no task returned"))?;

        details
            .container(container.as_str())
            .and_then(|c| c.runtime_id.clone())
            .ok_or_else(|| AttemptError::ContainerNotFound {
                container: container.to_string(),
                task: task.to_string(),
            })
    }

    /// Run the three resolution steps for `request`.
    pub async fn resolve(&self, request: &ConnectRequest) -> Result<SessionTarget, AttemptError> {
        let task = self.resolve_task(&request.cluster, &request.service).await?;
        info!(target: "dock.core.resolve", task = %task.arn, "found task ARN");

        let instance_id = self.resolve_host(&request.cluster, &task.host_ref).await?;
        info!(target: "dock.core.resolve", %instance_id, "found EC2 instance ID");

        let container_id = self
            .resolve_container(&request.cluster, &task.arn, &request.container)
            .await?;
        info!(target: "dock.core.resolve", %container_id, "found container ID");

        Ok(SessionTarget {
            instance_id,
            container_id,
        })
    }
}

fn describe_failed(task: &str, reason: impl Into<String>) -> AttemptError {
    AttemptError::DescribeFailed {
        task: task.to_string(),
        reason: reason.into(),
    }
}
