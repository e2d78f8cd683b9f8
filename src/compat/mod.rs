//! Tutor/course schedule compatibility.
//!
//! Decides whether a tutor's weekly availability covers every session a
//! course requires and explains each day that is not covered.
//!
//! # Algorithm
//!
//! For each course day, in the course's authored order:
//!
//! 1. Incomplete course day (missing start or end): no constraint, unless
//!    [`IncompleteDayPolicy::Flag`] is configured.
//! 2. Resolve the tutor's entry for the day by normalized label
//!    ([`day_key`](crate::models::day_key)), falling back to weekday identity.
//!    No entry, or a half-filled one, is a [`IssueKind::MissingAvailability`].
//! 3. The tutor window must contain the course window:
//!    `tutor_start <= course_start && course_end <= tutor_end`. Anything else,
//!    including a time that does not parse, is an
//!    [`IssueKind::OutsideAvailability`].
//!
//! The check is total: malformed input always becomes an issue, never a
//! panic or an error.

mod verdict;

pub use verdict::{CompatibilityVerdict, DayIssue, IssueKind};

use tracing::{debug, trace};

use crate::config::{IncompleteDayPolicy, MatchConfig};
use crate::models::{CourseScheduleRequirement, TimeWindow, TutorAvailability};

/// Checks a tutor against a course with the default policy.
///
/// ```
/// use tutor_schedule::compat::check_compatibility;
/// use tutor_schedule::models::WeeklySchedule;
///
/// let course = WeeklySchedule::new()
///     .with_day("Lunes", "14:00", "16:00")
///     .with_day("Miércoles", "14:00", "16:00");
/// let tutor = WeeklySchedule::new().with_day("Lunes", "13:00", "15:00");
///
/// let verdict = check_compatibility(&course, &tutor);
/// assert!(!verdict.compatible);
/// assert_eq!(verdict.messages(), vec![
///     "Lunes: 14:00-16:00 (tutor 13:00-15:00)",
///     "Miércoles: sin horario",
/// ]);
/// ```
pub fn check_compatibility(
    course: &CourseScheduleRequirement,
    tutor: &TutorAvailability,
) -> CompatibilityVerdict {
    check_compatibility_with(course, tutor, &MatchConfig::default())
}

/// Checks a tutor against a course.
pub fn check_compatibility_with(
    course: &CourseScheduleRequirement,
    tutor: &TutorAvailability,
    config: &MatchConfig,
) -> CompatibilityVerdict {
    let mut issues = Vec::new();

    for (day, slot) in course.iter() {
        let Some(course_bounds) = slot.bounds() else {
            if config.incomplete_course_days == IncompleteDayPolicy::Flag {
                issues.push(DayIssue::incomplete(day));
            }
            trace!(day, "course day incomplete");
            continue;
        };

        let tutor_bounds = tutor.resolve(day).and_then(|(_, s)| s.bounds());
        let Some(tutor_bounds) = tutor_bounds else {
            trace!(day, "tutor has no window");
            issues.push(DayIssue::missing(day));
            continue;
        };

        if covers(tutor_bounds, course_bounds) {
            trace!(day, "covered");
        } else {
            trace!(day, ?course_bounds, ?tutor_bounds, "not covered");
            issues.push(DayIssue::outside(day, course_bounds, tutor_bounds));
        }
    }

    debug!(
        days = course.len(),
        issues = issues.len(),
        "compatibility checked"
    );
    CompatibilityVerdict::from_issues(issues)
}

/// Whether the tutor window contains the course window. Unreadable or
/// inverted windows never cover.
fn covers(tutor: (&str, &str), course: (&str, &str)) -> bool {
    match (
        TimeWindow::parse(tutor.0, tutor.1),
        TimeWindow::parse(course.0, course.1),
    ) {
        (Ok(Some(t)), Ok(Some(c))) => t.contains(&c),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DaySlot, WeeklySchedule};

    fn course() -> WeeklySchedule {
        WeeklySchedule::new()
            .with_day("Lunes", "14:00", "16:00")
            .with_day("Miércoles", "14:00", "16:00")
    }

    #[test]
    fn test_scenario_fully_available() {
        let tutor = WeeklySchedule::new()
            .with_day("Lunes", "13:00", "17:00")
            .with_day("Miércoles", "13:00", "17:00");
        let v = check_compatibility(&course(), &tutor);
        assert!(v.compatible);
        assert!(v.issues.is_empty());
        assert_eq!(
            v.summary(&MatchConfig::default()),
            "Disponible para todos los días y horarios del curso"
        );
    }

    #[test]
    fn test_scenario_missing_day() {
        let tutor = WeeklySchedule::new().with_day("Lunes", "13:00", "15:00");
        let course = WeeklySchedule::new()
            .with_day("Lunes", "14:00", "15:00")
            .with_day("Miércoles", "14:00", "16:00");
        let v = check_compatibility(&course, &tutor);
        assert!(!v.compatible);
        assert_eq!(v.messages(), vec!["Miércoles: sin horario"]);
    }

    #[test]
    fn test_day_key_accent_insensitive() {
        let course = WeeklySchedule::new().with_day("Miércoles", "10:00", "11:00");
        for label in ["miercoles", "MIERCOLES", "miércoles", "Wednesday"] {
            let tutor = WeeklySchedule::new().with_day(label, "10:00", "11:00");
            assert!(check_compatibility(&course, &tutor).compatible, "{label}");
        }
    }

    #[test]
    fn test_empty_course_is_vacuously_compatible() {
        let empty = WeeklySchedule::new();
        assert!(check_compatibility(&empty, &WeeklySchedule::new()).compatible);
        let tutor = WeeklySchedule::new().with_day("Lunes", "08:00", "09:00");
        let v = check_compatibility(&empty, &tutor);
        assert!(v.compatible);
        assert!(v.issues.is_empty());
    }

    #[test]
    fn test_partial_overlap_is_not_enough() {
        let tutor = WeeklySchedule::new()
            .with_day("Lunes", "15:00", "18:00")
            .with_day("Miércoles", "10:00", "15:00");
        let v = check_compatibility(&course(), &tutor);
        assert_eq!(
            v.messages(),
            vec![
                "Lunes: 14:00-16:00 (tutor 15:00-18:00)",
                "Miércoles: 14:00-16:00 (tutor 10:00-15:00)",
            ]
        );
    }

    #[test]
    fn test_exact_bounds_are_covered() {
        let tutor = course();
        assert!(check_compatibility(&course(), &tutor).compatible);
    }

    #[test]
    fn test_issues_follow_course_order() {
        let course = WeeklySchedule::new()
            .with_day("Viernes", "09:00", "10:00")
            .with_day("Lunes", "09:00", "10:00")
            .with_day("Martes", "09:00", "10:00");
        let v = check_compatibility(&course, &WeeklySchedule::new());
        let days: Vec<&str> = v.issues.iter().map(|i| i.day.as_str()).collect();
        assert_eq!(days, vec!["Viernes", "Lunes", "Martes"]);
    }

    #[test]
    fn test_half_filled_tutor_day_is_missing() {
        let tutor = WeeklySchedule::new()
            .with_slot(
                "Lunes",
                DaySlot {
                    start: Some("08:00".into()),
                    end: None,
                },
            )
            .with_day("Miércoles", "08:00", "20:00");
        let v = check_compatibility(&course(), &tutor);
        assert_eq!(v.messages(), vec!["Lunes: sin horario"]);
    }

    #[test]
    fn test_unparseable_times_fail_containment() {
        let tutor = WeeklySchedule::new()
            .with_day("Lunes", "8am", "20:00")
            .with_day("Miércoles", "08:00", "20:00");
        let course = WeeklySchedule::new()
            .with_day("Lunes", "14:00", "16:00")
            .with_day("Miércoles", "14:00", "99:00");
        let v = check_compatibility(&course, &tutor);
        assert_eq!(
            v.messages(),
            vec![
                "Lunes: 14:00-16:00 (tutor 8am-20:00)",
                "Miércoles: 14:00-99:00 (tutor 08:00-20:00)",
            ]
        );
    }

    #[test]
    fn test_inverted_windows_fail_containment() {
        let tutor = WeeklySchedule::new().with_day("Lunes", "18:00", "08:00");
        let course = WeeklySchedule::new().with_day("Lunes", "09:00", "10:00");
        assert!(!check_compatibility(&course, &tutor).compatible);

        let tutor = WeeklySchedule::new().with_day("Lunes", "08:00", "18:00");
        let course = WeeklySchedule::new().with_day("Lunes", "10:00", "09:00");
        assert!(!check_compatibility(&course, &tutor).compatible);
    }

    #[test]
    fn test_incomplete_course_day_policy() {
        let course = WeeklySchedule::new()
            .with_slot(
                "Martes",
                DaySlot {
                    start: None,
                    end: Some("10:00".into()),
                },
            )
            .with_day("Jueves", "09:00", "10:00");
        let tutor = WeeklySchedule::new().with_day("Jueves", "09:00", "12:00");

        assert!(check_compatibility(&course, &tutor).compatible);

        let strict = MatchConfig::default().with_incomplete_course_days(IncompleteDayPolicy::Flag);
        let v = check_compatibility_with(&course, &tutor, &strict);
        assert_eq!(v.issues, vec![DayIssue::incomplete("Martes")]);
    }

    #[test]
    fn test_shrinking_course_or_growing_tutor_keeps_compatibility() {
        let base_tutor = (9u16, 17u16);
        for cs in 9..17u16 {
            for ce in cs..=17 {
                let course = WeeklySchedule::new().with_day(
                    "Lunes",
                    format!("{cs:02}:00"),
                    format!("{ce:02}:00"),
                );
                let tutor = WeeklySchedule::new().with_day(
                    "Lunes",
                    format!("{:02}:00", base_tutor.0),
                    format!("{:02}:00", base_tutor.1),
                );
                assert!(check_compatibility(&course, &tutor).compatible);

                // shrink course by 30 minutes at the end
                if ce > cs {
                    let shrunk = WeeklySchedule::new().with_day(
                        "Lunes",
                        format!("{cs:02}:00"),
                        format!("{:02}:30", ce - 1),
                    );
                    assert!(check_compatibility(&shrunk, &tutor).compatible);
                }

                // grow tutor by one hour on both sides
                let grown = WeeklySchedule::new().with_day(
                    "Lunes",
                    format!("{:02}:00", base_tutor.0 - 1),
                    format!("{:02}:00", base_tutor.1 + 1),
                );
                assert!(check_compatibility(&course, &grown).compatible);
            }
        }
    }

    #[test]
    fn test_tracing_enabled_verdict_unchanged() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("tutor_schedule=trace"))
            .with_test_writer()
            .try_init();
        let tutor = WeeklySchedule::new().with_day("Lunes", "13:00", "17:00");
        let v = check_compatibility(&course(), &tutor);
        assert_eq!(v.messages(), vec!["Miércoles: sin horario"]);
    }

    #[test]
    fn test_deterministic() {
        let tutor = WeeklySchedule::new().with_day("Lunes", "13:00", "15:00");
        let a = check_compatibility(&course(), &tutor);
        let b = check_compatibility(&course(), &tutor);
        assert_eq!(a, b);
    }
}
