use tracing::{info, instrument};

use dock_model::ConnectRequest;

use crate::{
    error::{AttemptError, CoreError},
    launcher::Launcher,
    plane::ControlPlane,
    resolve::Resolver,
    retry::{RetryController, RetryPolicy, Sleeper},
    select::Selector,
};

/// Resolve-then-launch workflow wrapped in the retry controller.
pub struct Connector<'a> {
    resolver: Resolver<'a>,
    launcher: &'a dyn Launcher,
    retry: RetryController<'a>,
}

impl<'a> Connector<'a> {
    pub fn new(
        plane: &'a dyn ControlPlane,
        selector: &'a dyn Selector,
        launcher: &'a dyn Launcher,
        sleeper: &'a dyn Sleeper,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            resolver: Resolver::new(plane, selector),
            launcher,
            retry: RetryController::new(policy, sleeper),
        }
    }

    /// One full attempt: fresh task, host and container lookups, then the session.
    #[instrument(level = "debug", skip_all, fields(attempt = n))]
    pub async fn attempt(&self, request: &ConnectRequest, n: u32) -> Result<(), AttemptError> {
        let target = self.resolver.resolve(request).await?;

        let max = self.retry.policy().max_attempts;
        info!(
            target: "dock.core.connect",
            launcher = self.launcher.name(),
            session = %target,
            "attempting to start SSM session (attempt {n}/{max})"
        );
        self.launcher.launch(&target).await?;

        info!(target: "dock.core.connect", "SSM session started successfully");
        Ok(())
    }

    /// Run attempts until a session exits successfully or the policy is exhausted.
    pub async fn connect(&self, request: &ConnectRequest) -> Result<u32, CoreError> {
        self.retry.run(move |n| self.attempt(request, n)).await
    }
}
