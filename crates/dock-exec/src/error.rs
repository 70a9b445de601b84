use thiserror::Error;

use dock_core::LaunchError;

pub type ExecResult<T> = Result<T, ExecError>;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("non-zero exit code: {code}")]
    NonZeroExit { code: i32 },
    #[error("spawn failed: {0}")]
    Spawn(String),
    #[error("killed by signal")]
    KilledBySignal,
    #[error("missing program")]
    MissingProgram,
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ExecError {
    fn from(e: std::io::Error) -> Self {
        ExecError::Io(e.to_string())
    }
}

impl From<ExecError> for LaunchError {
    fn from(e: ExecError) -> Self {
        LaunchError::new(e.to_string())
    }
}
