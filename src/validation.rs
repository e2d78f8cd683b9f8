//! Input validation for course schedules and tutor assignments.
//!
//! Two levels:
//! - [`validate_schedule`]: structural checks for an authored weekly
//!   schedule (forms, spreadsheet import). Detects:
//!   - Unknown day labels
//!   - The same day entered twice under different spellings
//!   - Half-filled days
//!   - Unreadable times
//!   - Windows ending before they start
//! - [`validate_assignment`]: the submit-time gate that rejects saving a
//!   course with a tutor who cannot cover it.
//!
//! The compatibility engine does not depend on either; it tolerates any
//! input and reports problems as verdict issues.

use std::collections::HashMap;

use tracing::warn;

use crate::compat::check_compatibility_with;
use crate::config::MatchConfig;
use crate::error::AssignmentError;
use crate::models::{day_key, CourseScheduleRequirement, DaySlot, Tutor, WeekDay, WeeklySchedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A label is not a recognized weekday.
    UnknownDay,
    /// Two labels name the same weekday.
    DuplicateDay,
    /// A day has a start but no end, or the reverse.
    IncompleteDay,
    /// A time does not parse as HH:MM.
    InvalidTime,
    /// A window ends before it starts.
    InvertedWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an authored weekly schedule.
///
/// Checks every day and returns all problems found.
pub fn validate_schedule(schedule: &WeeklySchedule) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashMap<WeekDay, &str> = HashMap::new();

    for (label, slot) in schedule.iter() {
        match WeekDay::from_label(label) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDay,
                format!("Unknown day: '{label}'"),
            )),
            Some(day) => {
                if let Some(first) = seen.insert(day, label) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DuplicateDay,
                        format!("Day '{label}' repeats '{first}'"),
                    ));
                }
            }
        }

        check_slot(label, slot, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_slot(label: &str, slot: &DaySlot, errors: &mut Vec<ValidationError>) {
    let Some(window) = slot.window() else {
        let blank = |s: &Option<String>| s.as_deref().map_or(true, |v| v.trim().is_empty());
        if blank(&slot.start) != blank(&slot.end) {
            errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteDay,
                format!("Day '{label}' needs both start and end"),
            ));
        }
        return;
    };

    match window {
        Err(e) => errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTime,
            format!("Day '{label}': {e}"),
        )),
        Ok(None) => errors.push(ValidationError::new(
            ValidationErrorKind::InvertedWindow,
            format!("Day '{label}' ends before it starts"),
        )),
        Ok(Some(_)) => {}
    }
}

/// Rejects assigning `tutor` to a course it cannot cover.
///
/// Inactive tutors are rejected before their availability is checked.
pub fn validate_assignment(
    course: &CourseScheduleRequirement,
    tutor: &Tutor,
    config: &MatchConfig,
) -> Result<(), AssignmentError> {
    if !tutor.active {
        warn!(tutor = %tutor.id, "assignment rejected: inactive tutor");
        return Err(AssignmentError::InactiveTutor {
            tutor_id: tutor.id.clone(),
        });
    }

    let verdict = check_compatibility_with(course, &tutor.availability, config);
    if verdict.compatible {
        return Ok(());
    }

    warn!(
        tutor = %tutor.id,
        issues = verdict.issues.len(),
        "assignment rejected: schedule conflict"
    );
    Err(AssignmentError::Incompatible {
        tutor_id: tutor.id.clone(),
        summary: verdict.summary(config),
        issues: verdict.issues.iter().map(|i| i.render(config)).collect(),
    })
}

/// Whether two labels denote the same day for matching purposes.
pub fn same_day(a: &str, b: &str) -> bool {
    day_key(a) == day_key(b)
        || matches!((WeekDay::from_label(a), WeekDay::from_label(b)), (Some(x), Some(y)) if x == y)
}
