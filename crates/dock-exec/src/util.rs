use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use crate::error::ExecError;

/// Command whose stdio is the caller's terminal.
pub fn cmd_interactive(program: &str, args: &[String]) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args.iter().map(|s| s.as_str()))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    cmd
}

pub fn check_status(status: ExitStatus) -> Result<(), ExecError> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(ExecError::NonZeroExit { code }),
        None => Err(ExecError::KilledBySignal),
    }
}
