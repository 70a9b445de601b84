use aws_sdk_ecs::error::DisplayErrorContext;

use dock_core::ControlPlaneError;

/// Flatten an SDK error, including its source chain, into a control-plane error.
pub(crate) fn sdk_error<E>(operation: &'static str, err: E) -> ControlPlaneError
where
    E: std::error::Error + 'static,
{
    ControlPlaneError::api(operation, DisplayErrorContext(&err))
}
