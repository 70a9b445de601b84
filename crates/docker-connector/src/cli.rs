use clap::Parser;

use dock_model::{ClusterRef, ConnectRequest, ContainerName, ServiceRef};
use dock_observe::{LoggerConfig, LoggerError, LoggerFormat};

use crate::error::AppError;

/// Open an interactive shell inside a running container of an ECS service.
#[derive(Debug, Clone, Parser)]
#[command(name = "docker-connector", version)]
pub struct Args {
    /// The ECS cluster name (empty selects the default cluster).
    #[arg(long, default_value = "")]
    pub cluster: String,

    /// The ECS service name.
    #[arg(long, default_value = "")]
    pub service: String,

    /// The container name.
    #[arg(long, default_value = "")]
    pub container: String,

    /// Optional AWS profile name.
    #[arg(long)]
    pub profile: Option<String>,

    /// Log filter directive.
    #[arg(long, env = "DOCKER_CONNECTOR_LOG", default_value = "info")]
    pub log_level: String,

    /// Log output format: text or json.
    #[arg(long, default_value = "text", value_parser = parse_format)]
    pub log_format: LoggerFormat,
}

fn parse_format(s: &str) -> Result<LoggerFormat, LoggerError> {
    s.parse()
}

impl Args {
    /// Validated connection request; a blank service or container is a usage error.
    pub fn request(&self) -> Result<ConnectRequest, AppError> {
        let service = ServiceRef::new(self.service.clone()).map_err(AppError::Usage)?;
        let container = ContainerName::new(self.container.clone()).map_err(AppError::Usage)?;
        Ok(ConnectRequest::new(
            ClusterRef::new(self.cluster.clone()),
            service,
            container,
        ))
    }

    /// Profile with the empty string treated as unset.
    pub fn profile(&self) -> Option<String> {
        self.profile.clone().filter(|p| !p.is_empty())
    }

    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            format: self.log_format,
            level: self.log_level.clone(),
            ..Default::default()
        }
    }
}
