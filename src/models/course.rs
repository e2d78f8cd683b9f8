//! Course model.
//!
//! A course is the unit being staffed: it meets on fixed weekdays at fixed
//! hours and has at most one assigned tutor.

use serde::{Deserialize, Serialize};

use super::{CourseScheduleRequirement, WeekDay};

/// A course draft as edited in the course form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Language taught.
    #[serde(default)]
    pub language: String,
    /// Days and hours the course meets, in selection order.
    #[serde(default)]
    pub schedule: CourseScheduleRequirement,
    /// Assigned tutor, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutor_id: Option<String>,
}

impl Course {
    /// Creates a course with no schedule.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Adds a meeting day.
    pub fn with_day(
        mut self,
        label: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.schedule = self.schedule.with_day(label, start, end);
        self
    }

    /// Replaces the schedule.
    pub fn with_schedule(mut self, schedule: CourseScheduleRequirement) -> Self {
        self.schedule = schedule;
        self
    }

    /// Sets the assigned tutor.
    pub fn with_tutor(mut self, tutor_id: impl Into<String>) -> Self {
        self.tutor_id = Some(tutor_id.into());
        self
    }

    /// Recognized meeting weekdays, in selection order. Unknown labels are
    /// left out.
    pub fn days(&self) -> Vec<WeekDay> {
        self.schedule
            .iter()
            .filter_map(|(label, _)| WeekDay::from_label(label))
            .collect()
    }

    /// Total weekly meeting time in minutes over complete, valid days.
    pub fn weekly_minutes(&self) -> u32 {
        self.schedule
            .iter()
            .filter_map(|(_, slot)| slot.window())
            .filter_map(|w| w.ok().flatten())
            .map(|w| u32::from(w.duration_minutes()))
            .sum()
    }
}
