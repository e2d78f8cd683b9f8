//! Compatibility verdict model.
//!
//! A verdict is derived from the current course schedule and one tutor's
//! availability. It is never stored; callers recompute it whenever either
//! input changes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;

/// Why one course day is not covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IssueKind {
    /// The tutor has no window (or a half-filled one) on this day.
    MissingAvailability,
    /// The tutor's window does not contain the course's window, or one of
    /// the four times could not be read.
    OutsideAvailability {
        course_start: String,
        course_end: String,
        tutor_start: String,
        tutor_end: String,
    },
    /// The course day itself lacks a start or end.
    IncompleteCourseDay,
}

/// One per-day conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayIssue {
    /// Day label as authored in the course schedule.
    pub day: String,
    /// Conflict classification.
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl DayIssue {
    pub fn missing(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            kind: IssueKind::MissingAvailability,
        }
    }

    pub fn outside(day: impl Into<String>, course: (&str, &str), tutor: (&str, &str)) -> Self {
        Self {
            day: day.into(),
            kind: IssueKind::OutsideAvailability {
                course_start: course.0.to_string(),
                course_end: course.1.to_string(),
                tutor_start: tutor.0.to_string(),
                tutor_end: tutor.1.to_string(),
            },
        }
    }

    pub fn incomplete(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            kind: IssueKind::IncompleteCourseDay,
        }
    }

    /// Human-readable text using the configured labels.
    pub fn render(&self, config: &MatchConfig) -> String {
        match &self.kind {
            IssueKind::MissingAvailability => format!("{}: {}", self.day, config.missing_label),
            IssueKind::IncompleteCourseDay => {
                format!("{}: {}", self.day, config.incomplete_label)
            }
            IssueKind::OutsideAvailability {
                course_start,
                course_end,
                tutor_start,
                tutor_end,
            } => format!(
                "{}: {}-{} ({} {}-{})",
                self.day, course_start, course_end, config.tutor_label, tutor_start, tutor_end
            ),
        }
    }
}

impl fmt::Display for DayIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&MatchConfig::default()))
    }
}

/// Result of comparing one course requirement against one tutor's
/// availability.
///
/// `compatible` is true iff `issues` is empty. Issues follow the course's
/// day order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityVerdict {
    pub compatible: bool,
    pub issues: Vec<DayIssue>,
}

impl CompatibilityVerdict {
    /// Builds a verdict from the recorded issues.
    pub fn from_issues(issues: Vec<DayIssue>) -> Self {
        Self {
            compatible: issues.is_empty(),
            issues,
        }
    }

    /// A verdict with no issues.
    pub fn compatible() -> Self {
        Self::from_issues(Vec::new())
    }

    /// Issue texts with the default labels.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// One-line summary: the affirmative message, or every issue joined by
    /// the configured separator.
    pub fn summary(&self, config: &MatchConfig) -> String {
        if self.compatible {
            return config.compatible_message.clone();
        }
        self.issues
            .iter()
            .map(|issue| issue.render(config))
            .collect::<Vec<_>>()
            .join(&config.separator)
    }

    /// Issues that are missing days, as opposed to hour conflicts.
    pub fn missing_days(&self) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|i| i.kind == IssueKind::MissingAvailability)
            .map(|i| i.day.as_str())
            .collect()
    }
}
