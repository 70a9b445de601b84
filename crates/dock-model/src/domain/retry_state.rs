use serde::{Deserialize, Serialize};

/// Position of the connect workflow inside its retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RetryState {
    /// Running attempt `n` (1-based).
    Attempting(u32),
    /// Session ran and exited successfully.
    Succeeded,
    /// Every attempt failed.
    Failed,
}

impl RetryState {
    /// Returns `true` if the workflow will not transition further.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RetryState::Succeeded | RetryState::Failed)
    }

    /// Attempt number, if an attempt is in progress.
    pub fn attempt(&self) -> Option<u32> {
        match self {
            RetryState::Attempting(n) => Some(*n),
            _ => None,
        }
    }
}
