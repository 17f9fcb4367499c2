/// Errors raised while preparing a check run, before any unit is read.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Invalid log format '{0}'. Must be one of: text, json")]
    InvalidLogFormat(String),

    #[error("{var} must be 'true' or 'false', got '{value}'")]
    InvalidFlag { var: &'static str, value: String },

    #[error("Usage: estate-check <current.json> <proposed.json>")]
    Usage,
}
