use async_trait::async_trait;
use tracing::{debug, info};

use dock_model::{CallerIdentity, ClusterRef, HostInstance, ServiceRef, TaskArn, TaskDetails};

use crate::error::{ControlPlaneError, CoreError};

/// Read-only view of the container orchestration control plane.
///
/// Implementations perform one remote call per method and do no caching.
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Identity of the credentials in use.
    async fn caller_identity(&self) -> Result<CallerIdentity, ControlPlaneError>;

    /// ARNs of the tasks of `service` whose desired status is RUNNING.
    async fn list_running_tasks(
        &self,
        cluster: &ClusterRef,
        service: &ServiceRef,
    ) -> Result<Vec<TaskArn>, ControlPlaneError>;

    /// Details of one task; `None` when the control plane returned nothing.
    async fn describe_task(
        &self,
        cluster: &ClusterRef,
        task: &str,
    ) -> Result<Option<TaskDetails>, ControlPlaneError>;

    /// Container instances matching `host_ref`.
    async fn describe_host_instances(
        &self,
        cluster: &ClusterRef,
        host_ref: &str,
    ) -> Result<Vec<HostInstance>, ControlPlaneError>;
}

/// Fail fast unless the control plane accepts the caller's credentials.
pub async fn validate_credentials(plane: &dyn ControlPlane) -> Result<CallerIdentity, CoreError> {
    debug!(target: "dock.core.auth", "checking caller identity");
    let identity = plane.caller_identity().await.map_err(CoreError::Auth)?;
    info!(
        target: "dock.core.auth",
        arn = %identity.arn,
        account = %identity.account,
        user_id = %identity.user_id,
        "authenticated as ARN: {identity}"
    );
    Ok(identity)
}
