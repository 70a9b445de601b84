use anyhow::Context;
use tracing::info;

use dock_aws::{AwsConfig, EcsControlPlane};
use dock_core::{
    ControlPlane, Connector, Launcher, RandomSelector, RetryPolicy, Selector, Sleeper,
    TokioSleeper, validate_credentials,
};
use dock_exec::{SessionConfig, SsmLauncher};
use dock_model::ConnectRequest;

use crate::{cli::Args, error::AppError};

/// Authenticate, then resolve and launch with the fixed retry policy.
pub async fn connect(
    plane: &dyn ControlPlane,
    launcher: &dyn Launcher,
    sleeper: &dyn Sleeper,
    selector: &dyn Selector,
    request: &ConnectRequest,
) -> Result<u32, AppError> {
    validate_credentials(plane).await?;

    let connector = Connector::new(plane, selector, launcher, sleeper, RetryPolicy::default());
    Ok(connector.connect(request).await?)
}

pub async fn run(args: Args) -> anyhow::Result<()> {
    let request = args.request()?;
    info!(
        cluster = %request.cluster,
        service = %request.service,
        container = %request.container,
        "connecting"
    );

    let aws = AwsConfig::default().with_profile(args.profile());
    let sdk = aws.load().await;
    let plane = EcsControlPlane::new(&sdk);

    let session = SessionConfig::new(aws.region.clone()).with_profile(args.profile());
    let launcher = SsmLauncher::new(session);

    connect(&plane, &launcher, &TokioSleeper, &RandomSelector, &request)
        .await
        .with_context(|| format!("service {} container {}", request.service, request.container))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex, time::Duration};

    use async_trait::async_trait;
    use dock_core::{ControlPlaneError, CoreError, LaunchError};
    use dock_model::{
        CallerIdentity, ClusterRef, ContainerInfo, ContainerName, HostInstance, ServiceRef,
        SessionTarget, TaskArn, TaskDetails,
    };

    use super::*;

    /// prod/web: task T1 on H1 (I1) with `app` and `sidecar`.
    struct Plane {
        authenticated: bool,
        lists: Mutex<u32>,
    }

    impl Plane {
        fn new(authenticated: bool) -> Self {
            Self {
                authenticated,
                lists: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl ControlPlane for Plane {
        async fn caller_identity(&self) -> Result<CallerIdentity, ControlPlaneError> {
            if !self.authenticated {
                return Err(ControlPlaneError::api("GetCallerIdentity", "no credentials"));
            }
            Ok(CallerIdentity::default())
        }

        async fn list_running_tasks(
            &self,
            _cluster: &ClusterRef,
            _service: &ServiceRef,
        ) -> Result<Vec<TaskArn>, ControlPlaneError> {
            *self.lists.lock().unwrap() += 1;
            Ok(vec!["T1".into()])
        }

        async fn describe_task(
            &self,
            _cluster: &ClusterRef,
            task: &str,
        ) -> Result<Option<TaskDetails>, ControlPlaneError> {
            let tasks = HashMap::from([(
                "T1",
                TaskDetails {
                    arn: "T1".into(),
                    host_ref: Some("H1".into()),
                    containers: vec![
                        ContainerInfo::new("app", "rt-123"),
                        ContainerInfo::new("sidecar", "rt-456"),
                    ],
                },
            )]);
            Ok(tasks.get(task).cloned())
        }

        async fn describe_host_instances(
            &self,
            _cluster: &ClusterRef,
            host_ref: &str,
        ) -> Result<Vec<HostInstance>, ControlPlaneError> {
            Ok(vec![HostInstance {
                host_ref: host_ref.into(),
                instance_id: Some("I1".into()),
            }])
        }
    }

    #[derive(Default)]
    struct Recorder {
        targets: Mutex<Vec<SessionTarget>>,
        sleeps: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Launcher for Recorder {
        fn name(&self) -> &'static str {
            "recorder"
        }

        async fn launch(&self, target: &SessionTarget) -> Result<(), LaunchError> {
            self.targets.lock().unwrap().push(target.clone());
            Ok(())
        }
    }

    #[async_trait]
    impl Sleeper for Recorder {
        async fn sleep(&self, delay: Duration) {
            self.sleeps.lock().unwrap().push(delay);
        }
    }

    fn request(container: &str) -> ConnectRequest {
        ConnectRequest::new(
            ClusterRef::new("prod"),
            ServiceRef::new("web").unwrap(),
            ContainerName::new(container).unwrap(),
        )
    }

    #[tokio::test]
    async fn connects_to_matching_container() {
        let plane = Plane::new(true);
        let rec = Recorder::default();

        let used = connect(&plane, &rec, &rec, &RandomSelector, &request("app"))
            .await
            .unwrap();

        assert_eq!(used, 1);
        assert_eq!(
            *rec.targets.lock().unwrap(),
            vec![SessionTarget {
                instance_id: "I1".into(),
                container_id: "rt-123".into()
            }]
        );
        assert!(rec.sleeps.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_container_is_fatal_after_three_attempts() {
        let plane = Plane::new(true);
        let rec = Recorder::default();

        let err = connect(&plane, &rec, &rec, &RandomSelector, &request("missing"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Core(CoreError::RetriesExhausted { attempts: 3, .. })
        ));
        assert_eq!(*plane.lists.lock().unwrap(), 3);
        assert_eq!(rec.sleeps.lock().unwrap().len(), 2);
        assert!(rec.targets.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unauthenticated_caller_never_resolves() {
        let plane = Plane::new(false);
        let rec = Recorder::default();

        let err = connect(&plane, &rec, &rec, &RandomSelector, &request("app"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Core(CoreError::Auth(_))));
        assert_eq!(*plane.lists.lock().unwrap(), 0);
        assert!(rec.sleeps.lock().unwrap().is_empty());
    }
}
