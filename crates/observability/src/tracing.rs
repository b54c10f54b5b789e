//! Tracing/logging initialization.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! `RUST_LOG` always wins over the configured default level.

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is unset or invalid.
    pub default_level: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl LogSettings {
    /// `debug` when verbose, `info` otherwise.
    pub fn verbose(verbose: bool) -> Self {
        Self {
            default_level: if verbose { "debug" } else { "info" }.to_string(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_level))
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(settings: &LogSettings) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(settings.filter())
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match settings.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
