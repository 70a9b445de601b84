use async_trait::async_trait;

use dock_model::SessionTarget;

use crate::error::LaunchError;

/// Opens an interactive session into a resolved container.
///
/// Implementations hand the terminal to the session and return once it exits.
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Run the session to completion; `Ok` only when it exited successfully.
    async fn launch(&self, target: &SessionTarget) -> Result<(), LaunchError>;
}
