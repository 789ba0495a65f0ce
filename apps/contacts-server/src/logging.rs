use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Noisy dependencies capped below the configured level.
const QUIET_TARGETS: &str = "sqlx=warn,sea_orm_migration=warn,hyper=info";

/// Build the filter: `RUST_LOG` if set, otherwise the configured level.
#[must_use]
pub fn build_filter(cfg: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for_level(&cfg.level))
}

fn filter_for_level(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("{level},{QUIET_TARGETS}")).unwrap_or_else(|e| {
        eprintln!("invalid log level {level:?} ({e}); falling back to info");
        EnvFilter::new(format!("info,{QUIET_TARGETS}"))
    })
}

/// Install the global subscriber. Logs go to stderr so stdout stays free for
/// `--print-config` and `check` output.
///
/// Calling this twice is harmless; the already installed subscriber stays.
pub fn init_logging(cfg: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(cfg))
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .try_init(),
    };

    if let Err(e) = installed {
        // Goes to the subscriber that is already in place.
        tracing::debug!(error = %e, "Global subscriber already set; keeping it");
    }
}
