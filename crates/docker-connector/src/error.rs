use thiserror::Error;

use dock_core::CoreError;
use dock_model::ModelError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(
        "Usage: docker-connector --cluster <cluster-name> --service <service-name> --container <container-name> [--profile <aws-profile>] ({0})"
    )]
    Usage(#[source] ModelError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
