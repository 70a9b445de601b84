//! Interactive container sessions through `aws ssm start-session`.
//!
//! The session manager connects to the EC2 host and runs `docker exec` for the
//! resolved container there. The child process inherits the terminal; its exit
//! status is the only result consumed.

use std::fmt;

use async_trait::async_trait;
use tracing::{debug, trace};

use dock_core::{LaunchError, Launcher};
use dock_model::SessionTarget;

use crate::{
    error::{ExecError, ExecResult},
    util::{check_status, cmd_interactive},
};

/// SSM document that runs an arbitrary command interactively.
pub const INTERACTIVE_DOCUMENT: &str = "AWS-StartInteractiveCommand";

/// Settings of the external session tool.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Executable of the AWS CLI.
    pub program: String,
    pub document: String,
    pub region: String,
    /// Named profile forwarded as `--profile` when set.
    pub profile: Option<String>,
}

impl SessionConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Default::default()
        }
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile.filter(|p| !p.is_empty());
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            program: "aws".to_string(),
            document: INTERACTIVE_DOCUMENT.to_string(),
            region: String::new(),
            profile: None,
        }
    }
}

/// Fully rendered invocation of the session tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl SessionCommand {
    pub fn build(cfg: &SessionConfig, target: &SessionTarget) -> Self {
        let params = parameters(&target.container_id);
        let mut args: Vec<String> = [
            "ssm",
            "start-session",
            "--target",
            target.instance_id.as_str(),
            "--document-name",
            cfg.document.as_str(),
            "--parameters",
            params.as_str(),
            "--region",
            cfg.region.as_str(),
        ]
        .into_iter()
        .map(String::from)
        .collect();

        if let Some(profile) = &cfg.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }

        Self {
            program: cfg.program.clone(),
            args,
        }
    }
}

impl fmt::Display for SessionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// `--parameters` payload: a shell running inside the container.
fn parameters(container_id: &str) -> String {
    serde_json::json!({
        "command": [format!("sudo docker exec -it {container_id} bash")],
    })
    .to_string()
}

/// [`Launcher`] that shells out to the AWS CLI session manager.
pub struct SsmLauncher {
    cfg: SessionConfig,
}

impl SsmLauncher {
    pub fn new(cfg: SessionConfig) -> Self {
        Self { cfg }
    }

    /// Spawn the session and wait for it to exit.
    pub async fn run(&self, target: &SessionTarget) -> ExecResult<()> {
        if self.cfg.program.trim().is_empty() {
            return Err(ExecError::MissingProgram);
        }
        let command = SessionCommand::build(&self.cfg, target);
        trace!(target: "dock.exec.session", %command, "spawn");

        let mut child = cmd_interactive(&command.program, &command.args)
            .spawn()
            .map_err(|e| ExecError::Spawn(format!("{}: {e}", command.program)))?;

        let status = child.wait().await?;
        debug!(target: "dock.exec.session", ?status, "session exited");
        check_status(status)
    }
}

#[async_trait]
impl Launcher for SsmLauncher {
    fn name(&self) -> &'static str {
        "ssm"
    }

    async fn launch(&self, target: &SessionTarget) -> Result<(), LaunchError> {
        self.run(target).await.map_err(LaunchError::from)
    }
}
