use thiserror::Error;

/// Failure reported by a control-plane client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControlPlaneError {
    #[error("{operation} failed: {reason}")]
    Api {
        operation: &'static str,
        reason: String,
    },
}

impl ControlPlaneError {
    pub fn api(operation: &'static str, reason: impl ToString) -> Self {
        ControlPlaneError::Api {
            operation,
            reason: reason.to_string(),
        }
    }
}

/// Failure reported by a session launcher.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct LaunchError {
    pub reason: String,
}

impl LaunchError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Failure of a single resolve-and-launch attempt. Every variant is retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttemptError {
    #[error("no running tasks found for service {service}")]
    NoRunningTasks { service: String },

    #[error("could not describe the ECS task {task}: {reason}")]
    DescribeFailed { task: String, reason: String },

    #[error("no container instances found for {host_ref} in cluster {cluster}")]
    NoHostInstances { cluster: String, host_ref: String },

    #[error("no container named {container} found in task {task}")]
    ContainerNotFound { container: String, task: String },

    #[error("failed to start session: {0}")]
    SessionLaunchFailed(#[from] LaunchError),
}

impl AttemptError {
    /// Short name of the workflow step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            AttemptError::NoRunningTasks { .. } => "task",
            AttemptError::DescribeFailed { .. } => "describe",
            AttemptError::NoHostInstances { .. } => "host",
            AttemptError::ContainerNotFound { .. } => "container",
            AttemptError::SessionLaunchFailed(_) => "session",
        }
    }
}

/// Fatal errors surfaced to the binary.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unable to authenticate with AWS, please check you are logged in: {0}")]
    Auth(#[source] ControlPlaneError),

    #[error("failed to start SSM session after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: AttemptError,
    },
}
