use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that enables logging and carries the filter directive.
pub const LOG_ENV_VAR: &str = "DASHSTORE_LOG";

/// Initialize tracing to stderr.
///
/// Logging is off unless `DASHSTORE_LOG` is set, so stdout only ever carries
/// command output. The variable's value is used as the filter (e.g.,
/// `debug` or `dashstore=debug`); an unparsable value falls back to `info`.
pub fn init_tracing() {
    let Some(directive) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
    {
        // The already-installed subscriber stays in effect and receives this.
        tracing::debug!(error = %err, "Tracing subscriber already installed");
    }
}
