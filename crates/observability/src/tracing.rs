//! Tracing/logging initialization.
//!
//! Logs go to stderr so that stdout stays free for report output. Filtering is
//! driven by `RUST_LOG` and defaults to `warn`.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "GILDED_ROSE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn";

/// Output format of the process-wide subscriber.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format: {0}")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// Initialize tracing using [`LOG_FORMAT_ENV`] to choose the format.
///
/// An unrecognized value falls back to [`LogFormat::Compact`] and is reported
/// once the subscriber is installed.
pub fn init_from_env() {
    let parsed = std::env::var(LOG_FORMAT_ENV)
        .ok()
        .map(|raw| raw.parse::<LogFormat>());

    match parsed {
        Some(Ok(format)) => init(format),
        Some(Err(e)) => {
            init(LogFormat::Compact);
            ::tracing::warn!("{e}; falling back to compact logs");
        }
        None => init(LogFormat::default()),
    }
}

/// Initialize tracing/logging for the process with an explicit format.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        // JSON logs + timestamps, matching what log shippers expect.
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" pretty ".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("compact".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert_eq!("".parse::<LogFormat>(), Ok(LogFormat::Compact));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "yaml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err, UnknownLogFormat("yaml".to_string()));
        assert_eq!(err.to_string(), "unknown log format: yaml");
    }

    #[test]
    fn init_is_idempotent() {
        init(LogFormat::Compact);
        init(LogFormat::Json);
        init_from_env();
    }
}
