//! Roster search and "only compatible" filtering.
//!
//! Text search and the compatibility filter compose by intersection.
//! Filtering decides which tutors are shown, never which are compatible:
//! each tutor's verdict is computed the same way with or without a query.

use serde::Serialize;

use crate::compat::{check_compatibility_with, CompatibilityVerdict};
use crate::config::MatchConfig;
use crate::models::{fold, CourseScheduleRequirement, Tutor};

/// Tutor list filter as driven by the assignment view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorFilter {
    /// Substring matched against name, specialty and email.
    pub query: Option<String>,
    /// Keep only tutors whose verdict is compatible.
    pub only_compatible: bool,
    /// Keep inactive tutors too.
    pub include_inactive: bool,
}

/// A tutor that passed the filter, with its verdict for badge rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredTutor<'a> {
    pub tutor: &'a Tutor,
    pub verdict: CompatibilityVerdict,
}

impl TutorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text. Blank text clears the query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = (!query.trim().is_empty()).then_some(query);
        self
    }

    pub fn only_compatible(mut self) -> Self {
        self.only_compatible = true;
        self
    }

    pub fn include_inactive(mut self) -> Self {
        self.include_inactive = true;
        self
    }

    /// Whether a tutor matches the search text (case- and
    /// accent-insensitive substring of name, specialty or email).
    pub fn matches_query(&self, tutor: &Tutor) -> bool {
        let Some(query) = &self.query else {
            return true;
        };
        let needle = fold(query.trim());
        [&tutor.name, &tutor.specialty, &tutor.email]
            .iter()
            .any(|field| fold(field).contains(&needle))
    }

    /// Applies the filter to a roster, keeping roster order.
    pub fn apply<'a>(
        &self,
        course: &CourseScheduleRequirement,
        roster: &'a [Tutor],
        config: &MatchConfig,
    ) -> Vec<FilteredTutor<'a>> {
        roster
            .iter()
            .filter(|t| self.include_inactive || t.active)
            .filter(|t| self.matches_query(t))
            .map(|tutor| FilteredTutor {
                tutor,
                verdict: check_compatibility_with(course, &tutor.availability, config),
            })
            .filter(|f| !self.only_compatible || f.verdict.compatible)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeeklySchedule;

    fn roster() -> Vec<Tutor> {
        vec![
            Tutor::new("t1", "Ana Pérez")
                .with_specialty("Inglés")
                .with_email("ana@academia.test")
                .with_day("Lunes", "08:00", "18:00"),
            Tutor::new("t2", "Bruno Díaz")
                .with_specialty("Francés")
                .with_email("bruno@academia.test")
                .with_day("Martes", "08:00", "18:00"),
            Tutor::new("t3", "Carla Ruiz")
                .with_specialty("Inglés")
                .with_email("carla@academia.test")
                .with_day("Lunes", "08:00", "18:00")
                .inactive(),
        ]
    }

    fn course() -> WeeklySchedule {
        WeeklySchedule::new().with_day("Lunes", "10:00", "12:00")
    }

    fn ids(list: &[FilteredTutor<'_>]) -> Vec<String> {
        list.iter().map(|f| f.tutor.id.clone()).collect()
    }

    #[test]
    fn test_no_filter_shows_active() {
        let roster = roster();
        let out = TutorFilter::new().apply(&course(), &roster, &MatchConfig::default());
        assert_eq!(ids(&out), vec!["t1", "t2"]);
        assert!(out[0].verdict.compatible);
        assert!(!out[1].verdict.compatible);
    }

    #[test]
    fn test_query_matches_fields_without_accents() {
        let roster = roster();
        let config = MatchConfig::default();
        let by_specialty = TutorFilter::new()
            .with_query("ingles")
            .apply(&course(), &roster, &config);
        assert_eq!(ids(&by_specialty), vec!["t1"]);

        let by_name = TutorFilter::new().with_query("DIAZ").apply(&course(), &roster, &config);
        assert_eq!(ids(&by_name), vec!["t2"]);

        let by_email = TutorFilter::new()
            .with_query("carla@")
            .include_inactive()
            .apply(&course(), &roster, &config);
        assert_eq!(ids(&by_email), vec!["t3"]);
    }

    #[test]
    fn test_only_compatible_intersects() {
        let roster = roster();
        let config = MatchConfig::default();
        let out = TutorFilter::new()
            .only_compatible()
            .include_inactive()
            .apply(&course(), &roster, &config);
        assert_eq!(ids(&out), vec!["t1", "t3"]);

        let none = TutorFilter::new()
            .only_compatible()
            .with_query("bruno")
            .apply(&course(), &roster, &config);
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_does_not_change_verdicts() {
        let roster = roster();
        let config = MatchConfig::default();
        let all = TutorFilter::new().include_inactive().apply(&course(), &roster, &config);
        let searched = TutorFilter::new()
            .include_inactive()
            .with_query("academia")
            .apply(&course(), &roster, &config);
        assert_eq!(all, searched);
    }

    #[test]
    fn test_blank_query_is_cleared() {
        assert_eq!(TutorFilter::new().with_query("   ").query, None);
    }
}
