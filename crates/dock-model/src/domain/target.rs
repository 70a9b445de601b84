use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully resolved destination of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTarget {
    /// Host the session manager connects to.
    pub instance_id: String,
    /// Runtime id of the container to exec into on that host.
    pub container_id: String,
}

impl fmt::Display for SessionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.instance_id, self.container_id)
    }
}
