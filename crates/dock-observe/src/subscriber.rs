use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter, time::OffsetTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::{config::LoggerConfig, error::LoggerError, format::LoggerFormat};

type BoxSubscriber = Box<dyn Subscriber + Send + Sync>;

/// Install the global subscriber described by `cfg`, writing to stderr.
///
/// Call it once, before the first event. A second call fails with
/// [`LoggerError::AlreadyInstalled`].
pub fn logger_init(cfg: &LoggerConfig) -> Result<(), LoggerError> {
    build(cfg, std::io::stderr)?
        .try_init()
        .map_err(LoggerError::AlreadyInstalled)
}

fn build<W>(cfg: &LoggerConfig, writer: W) -> Result<BoxSubscriber, LoggerError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(&cfg.level).map_err(|source| LoggerError::BadFilter {
        directive: cfg.level.clone(),
        source,
    })?;
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(cfg.with_targets)
        .with_timer(local_rfc3339());
    let registry = tracing_subscriber::registry().with(filter);

    Ok(match cfg.format {
        LoggerFormat::Text => Box::new(registry.with(layer.with_ansi(cfg.use_color))),
        LoggerFormat::Json => Box::new(registry.with(layer.json().with_ansi(false))),
    })
}

// The local offset is unknown once other threads exist; fall back to UTC.
fn local_rfc3339() -> OffsetTime<Rfc3339> {
    OffsetTime::local_rfc_3339().unwrap_or_else(|_| OffsetTime::new(UtcOffset::UTC, Rfc3339))
}
