//! In-memory fakes for the workflow seams.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;

use dock_model::{
    CallerIdentity, ClusterRef, ConnectRequest, ContainerInfo, ContainerName, HostInstance,
    ServiceRef, SessionTarget, TaskArn, TaskDetails,
};

use crate::{
    ControlPlane, ControlPlaneError, LaunchError, Launcher, Selector, retry::Sleeper,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListTasks,
    DescribeTask(String),
    DescribeHost(String),
}

#[derive(Default)]
pub struct FakePlane {
    pub task_arns: Vec<TaskArn>,
    pub tasks: HashMap<TaskArn, TaskDetails>,
    pub hosts: HashMap<String, Vec<HostInstance>>,
    pub auth_fails: bool,
    pub list_fails: bool,
    pub describe_fails: bool,
    pub hosts_fail: bool,
    pub calls: Mutex<Vec<Call>>,
}

impl FakePlane {
    /// One task `T1` on host `H1` (instance `I1`) with containers `app` and `sidecar`.
    pub fn scenario() -> Self {
        let mut plane = FakePlane::default();
        plane.add_task(
            "T1",
            Some("H1"),
            vec![
                ContainerInfo::new("app", "rt-123"),
                ContainerInfo::new("sidecar", "rt-456"),
            ],
        );
        plane
    }

    pub fn add_task(&mut self, arn: &str, host: Option<&str>, containers: Vec<ContainerInfo>) {
        self.task_arns.push(arn.to_string());
        self.tasks.insert(
            arn.to_string(),
            TaskDetails {
                arn: arn.to_string(),
                host_ref: host.map(str::to_string),
                containers,
            },
        );
        if let Some(host) = host {
            let instance_id = host.replacen('H', "I", 1);
            self.hosts.insert(
                host.to_string(),
                vec![HostInstance {
                    host_ref: host.to_string(),
                    instance_id: Some(instance_id),
                }],
            );
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ControlPlane for FakePlane {
    async fn caller_identity(&self) -> Result<CallerIdentity, ControlPlaneError> {
        if self.auth_fails {
            return Err(ControlPlaneError::api("GetCallerIdentity", "expired token"));
        }
        Ok(CallerIdentity {
            arn: "arn:aws:iam::123456789012:user/dev".into(),
            account: "123456789012".into(),
            user_id: "AIDAEXAMPLE".into(),
        })
    }

    async fn list_running_tasks(
        &self,
        _cluster: &ClusterRef,
        _service: &ServiceRef,
    ) -> Result<Vec<TaskArn>, ControlPlaneError> {
        self.record(Call::ListTasks);
        if self.list_fails {
            return Err(ControlPlaneError::api("ListTasks", "throttled"));
        }
        Ok(self.task_arns.clone())
    }

    async fn describe_task(
        &self,
        _cluster: &ClusterRef,
        task: &str,
    ) -> Result<Option<TaskDetails>, ControlPlaneError> {
        self.record(Call::DescribeTask(task.to_string()));
        if self.describe_fails {
            return Err(ControlPlaneError::api("DescribeTasks", "access denied"));
        }
        Ok(self.tasks.get(task).cloned())
    }

    async fn describe_host_instances(
        &self,
        _cluster: &ClusterRef,
        host_ref: &str,
    ) -> Result<Vec<HostInstance>, ControlPlaneError> {
        self.record(Call::DescribeHost(host_ref.to_string()));
        if self.hosts_fail {
            return Err(ControlPlaneError::api("DescribeContainerInstances", "throttled"));
        }
        Ok(self.hosts.get(host_ref).cloned().unwrap_or_default())
    }
}

/// Always picks the same index.
pub struct FixedSelector(usize);

impl FixedSelector {
    pub fn new(idx: usize) -> Self {
        Self(idx)
    }
}

impl Selector for FixedSelector {
    fn pick(&self, _len: usize) -> usize {
        self.0
    }
}

/// Picks 0, 1, 2, ... wrapping at `len`.
#[derive(Default)]
pub struct RoundRobinSelector(AtomicUsize);

impl Selector for RoundRobinSelector {
    fn pick(&self, len: usize) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) % len
    }
}

#[derive(Default)]
pub struct CountingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl CountingSleeper {
    pub fn count(&self) -> usize {
        self.delays.lock().unwrap().len()
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for CountingSleeper {
    async fn sleep(&self, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
    }
}

/// Fails the first `failures` launches, then succeeds.
#[derive(Default)]
pub struct FakeLauncher {
    pub failures: usize,
    pub launched: Mutex<Vec<SessionTarget>>,
}

impl FakeLauncher {
    pub fn failing(failures: usize) -> Self {
        Self {
            failures,
            ..Default::default()
        }
    }

    pub fn launched(&self) -> Vec<SessionTarget> {
        self.launched.lock().unwrap().clone()
    }
}

#[async_trait]
impl Launcher for FakeLauncher {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn launch(&self, target: &SessionTarget) -> Result<(), LaunchError> {
        let mut launched = self.launched.lock().unwrap();
        launched.push(target.clone());
        if launched.len() <= self.failures {
            return Err(LaunchError::new("exit code: 255"));
        }
        Ok(())
    }
}

/// `prod` / `web` / `container`.
pub fn request(container: &str) -> ConnectRequest {
    ConnectRequest::new(
        ClusterRef::new("prod"),
        ServiceRef::new("web").unwrap(),
        ContainerName::new(container).unwrap(),
    )
}
