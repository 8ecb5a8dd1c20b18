use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging settings.
///
/// # Environment Variables
///
/// - `LOG_LEVEL`: default level for this application's targets (default: "info")
/// - `LOG_DIR`: directory for rolling log files (default: "storage/logs")
/// - `LOG_JSON`: also write a JSON log file when "true" or "1" (default: false)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub dir: PathBuf,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: PathBuf::from("storage/logs"),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            level: lookup("LOG_LEVEL").unwrap_or(defaults.level),
            dir: lookup("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.dir),
            json: lookup("LOG_JSON")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.json),
        }
    }

    fn filter_directives(&self) -> String {
        format!(
            "academia={level},academia_rbac={level},academia_db={level},sqlx=warn,hyper=warn",
            level = self.level
        )
    }
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter_directives()))
}

/// Console-only logging, for tools and tests.
///
/// Does nothing when a global subscriber is already installed.
pub fn init_basic_console_logging() {
    let config = LoggingConfig::from_env();

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter(&config));

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}

/// Console logging plus daily-rolling files under [`LoggingConfig::dir`].
///
/// Errors go to `academia.log`; with `json` enabled, everything at info and
/// above also goes to `academia.json`. The returned guards flush the file
/// writers when dropped and must be held for the life of the process.
pub fn init_tracing(config: &LoggingConfig) -> std::io::Result<Vec<WorkerGuard>> {
    std::fs::create_dir_all(&config.dir)?;
    let mut guards = Vec::new();

    let console_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter(config));

    let (file_writer, guard) = tracing_appender::non_blocking(RollingFileAppender::new(
        Rotation::DAILY,
        &config.dir,
        "academia.log",
    ));
    guards.push(guard);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    let json_layer = if config.json {
        let (json_writer, guard) = tracing_appender::non_blocking(RollingFileAppender::new(
            Rotation::DAILY,
            &config.dir,
            "academia.json",
        ));
        guards.push(guard);

        Some(
            fmt::layer()
                .json()
                .with_writer(json_writer)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(EnvFilter::new("info")),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .try_init()
        .map_err(std::io::Error::other)?;

    tracing::info!(dir = %config.dir.display(), json = config.json, "Tracing initialized");
    Ok(guards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        assert_eq!(LoggingConfig::from_lookup(|_| None), LoggingConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let env = HashMap::from([
            ("LOG_LEVEL", "debug"),
            ("LOG_DIR", "/var/log/academia"),
            ("LOG_JSON", "TRUE"),
        ]);
        let config = LoggingConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.level, "debug");
        assert_eq!(config.dir, PathBuf::from("/var/log/academia"));
        assert!(config.json);
    }

    #[test]
    fn test_filter_directives_use_level() {
        let config = LoggingConfig {
            level: "trace".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.filter_directives().starts_with("academia=trace,"));
    }
}
