mod names;
pub use names::{ClusterRef, ContainerName, ServiceRef};

mod request;
pub use request::ConnectRequest;

mod task;
pub use task::{ContainerInfo, TaskDetails, TaskHandle};

mod host;
pub use host::HostInstance;

mod target;
pub use target::SessionTarget;

mod identity;
pub use identity::CallerIdentity;

mod retry_state;
pub use retry_state::RetryState;

/// Opaque ARN-like identifier of a running task.
pub type TaskArn = String;

/// Platform-layer reference of the host a task runs on (container instance ARN).
pub type HostRef = String;
