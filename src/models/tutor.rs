//! Tutor model.
//!
//! A tutor is the resource assigned to a course: a person with a
//! specialty (the language they teach), contact details, an active flag,
//! and a declared weekly availability.

use serde::{Deserialize, Serialize};

use super::TutorAvailability;

/// A tutor roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    /// Unique tutor identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Teaching specialty (e.g., "Inglés", "Francés").
    #[serde(default)]
    pub specialty: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Inactive tutors stay in the roster but take no new courses.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Declared weekly availability.
    #[serde(default)]
    pub availability: TutorAvailability,
}

fn default_active() -> bool {
    true
}

impl Tutor {
    /// Creates an active tutor with no availability.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialty: String::new(),
            email: String::new(),
            active: true,
            availability: TutorAvailability::new(),
        }
    }

    /// Sets the specialty.
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    /// Sets the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Replaces the availability.
    pub fn with_availability(mut self, availability: TutorAvailability) -> Self {
        self.availability = availability;
        self
    }

    /// Adds one available day.
    pub fn with_day(
        mut self,
        label: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.availability = self.availability.with_day(label, start, end);
        self
    }

    /// Marks the tutor inactive.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}
