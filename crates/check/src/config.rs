use crate::error::CheckError;

/// Output format for log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Harness configuration loaded from environment variables.
///
/// All fields have defaults suitable for running against local snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Log line format (default: `text`).
    pub log_format: LogFormat,
    /// When set, output is wrapped in an audit record attributed to this actor.
    pub actor: Option<String>,
    /// Pretty-print JSON on stdout (default: `true`).
    pub pretty: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            actor: None,
            pretty: true,
        }
    }
}

impl CheckConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `ESTATE_CHECK_LOG_FORMAT` | `text`  |
    /// | `ESTATE_CHECK_ACTOR`      | unset   |
    /// | `ESTATE_CHECK_PRETTY`     | `true`  |
    pub fn from_env() -> Result<Self, CheckError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CheckError> {
        let defaults = Self::default();

        let log_format = match lookup("ESTATE_CHECK_LOG_FORMAT") {
            Some(raw) => LogFormat::from_str(&raw).ok_or(CheckError::InvalidLogFormat(raw))?,
            None => defaults.log_format,
        };

        let actor = lookup("ESTATE_CHECK_ACTOR")
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        let pretty = match lookup("ESTATE_CHECK_PRETTY") {
            Some(raw) => parse_flag("ESTATE_CHECK_PRETTY", &raw)?,
            None => defaults.pretty,
        };

        Ok(Self {
            log_format,
            actor,
            pretty,
        })
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, CheckError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CheckError::InvalidFlag {
            var,
            value: raw.to_string(),
        }),
    }
}
