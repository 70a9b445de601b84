mod error;
pub use error::{ExecError, ExecResult};

mod util;

pub mod session;
pub use session::{SessionCommand, SessionConfig, SsmLauncher};
