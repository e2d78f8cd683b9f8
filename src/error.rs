//! Error types.
//!
//! The compatibility engine itself is total and never returns these; they
//! surface from the helpers around it (time parsing, configuration loading,
//! submit-time assignment checks).

use thiserror::Error;

/// Failure to read a wall-clock time such as `"14:30"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("time is empty")]
    Empty,

    #[error("malformed time '{input}', expected HH:MM")]
    Malformed { input: String },

    #[error("time '{input}' is out of range 00:00-23:59")]
    OutOfRange { input: String },
}

/// Failure to load a [`MatchConfig`](crate::config::MatchConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid match configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid match configuration: {message}")]
    Invalid { message: String },
}

/// Reasons a tutor cannot be saved as a course's assigned tutor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssignmentError {
    #[error("tutor '{tutor_id}' is inactive")]
    InactiveTutor { tutor_id: String },

    #[error("tutor '{tutor_id}' is not available for the course schedule: {summary}")]
    Incompatible {
        tutor_id: String,
        summary: String,
        issues: Vec<String>,
    },
}
