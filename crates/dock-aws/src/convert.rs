//! SDK shapes to domain types.

use aws_sdk_ecs::types::{Container, ContainerInstance, Task};
use aws_sdk_sts::operation::get_caller_identity::GetCallerIdentityOutput;

use dock_model::{CallerIdentity, ContainerInfo, HostInstance, TaskDetails};

pub(crate) fn task_details(task: &Task, requested: &str) -> TaskDetails {
    TaskDetails {
        arn: task.task_arn().unwrap_or(requested).to_string(),
        host_ref: task.container_instance_arn().map(str::to_string),
        containers: task.containers().iter().filter_map(container_info).collect(),
    }
}

/// Containers without a name cannot be matched and are skipped.
fn container_info(container: &Container) -> Option<ContainerInfo> {
    Some(ContainerInfo {
        name: container.name()?.to_string(),
        runtime_id: container.runtime_id().map(str::to_string),
    })
}

pub(crate) fn host_instance(instance: &ContainerInstance, requested: &str) -> HostInstance {
    HostInstance {
        host_ref: instance
            .container_instance_arn()
            .unwrap_or(requested)
            .to_string(),
        instance_id: instance.ec2_instance_id().map(str::to_string),
    }
}

pub(crate) fn caller_identity(out: &GetCallerIdentityOutput) -> CallerIdentity {
    CallerIdentity {
        arn: out.arn().unwrap_or_default().to_string(),
        account: out.account().unwrap_or_default().to_string(),
        user_id: out.user_id().unwrap_or_default().to_string(),
    }
}
