//! Observability configuration, read from the environment.

use core::str::FromStr;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "VALUEOBJECT_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Compact human-readable lines.
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "compact" => Ok(LogFormat::Text),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives (e.g. `info,valueobject_paint=debug`).
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Reads `RUST_LOG` and [`LOG_FORMAT_ENV`]; unset or invalid values use defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = format
            .and_then(|f| f.parse().ok())
            .unwrap_or_default();
        Self { filter, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_json_at_info() {
        let config = ObservabilityConfig::from_vars(None, None);
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_vars(
            Some("debug".to_string()),
            Some(" TEXT ".to_string()),
        );
        assert_eq!(config.filter, "debug");
        assert_eq!(config.format, LogFormat::Text);
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let config = ObservabilityConfig::from_vars(Some("  ".to_string()), Some("xml".to_string()));
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
