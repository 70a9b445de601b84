pub mod error;
pub use error::{AttemptError, ControlPlaneError, CoreError, LaunchError};

pub mod plane;
pub use plane::{ControlPlane, validate_credentials};

pub mod launcher;
pub use launcher::Launcher;

pub mod select;
pub use select::{RandomSelector, Selector, pick_uniform};

pub mod resolve;
pub use resolve::Resolver;

pub mod retry;
pub use retry::{RetryController, RetryPolicy, Sleeper, TokioSleeper};

pub mod connect;
pub use connect::Connector;

#[cfg(test)]
pub(crate) mod testing;
