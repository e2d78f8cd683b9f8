//! Weekly schedule models.
//!
//! A [`WeeklySchedule`] maps day labels to the `{start, end}` pair authored
//! for that day. The same shape describes both what a course requires and
//! what a tutor offers:
//!
//! | Alias | Meaning |
//! |-------|---------|
//! | [`CourseScheduleRequirement`] | exact days and hours a course meets |
//! | [`TutorAvailability`] | window per day in which a tutor can teach |
//!
//! Day order is the order the days were authored or selected in, and it is
//! preserved through serialization.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::time::TimeWindow;
use super::weekday::{day_key, WeekDay};
use crate::error::TimeParseError;

/// Days and hours a course meets.
pub type CourseScheduleRequirement = WeeklySchedule;

/// Days and hours a tutor can teach. At most one window per day.
pub type TutorAvailability = WeeklySchedule;

/// The `{start, end}` pair authored for one day.
///
/// Times are kept as typed so conflict messages can echo them. Either side
/// may be missing while a form is half-filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl DaySlot {
    /// Creates a fully specified slot.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Creates a slot from a parsed window.
    pub fn from_window(window: TimeWindow) -> Self {
        Self::new(window.start().to_string(), window.end().to_string())
    }

    /// Both times, trimmed, if both are present and non-blank.
    pub fn bounds(&self) -> Option<(&str, &str)> {
        let start = self.start.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let end = self.end.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((start, end))
    }

    /// Whether both start and end are present.
    pub fn is_complete(&self) -> bool {
        self.bounds().is_some()
    }

    /// Parsed window.
    ///
    /// - `None`: the slot is incomplete.
    /// - `Some(Err(_))`: a time does not parse.
    /// - `Some(Ok(None))`: both parse but end is before start.
    pub fn window(&self) -> Option<Result<Option<TimeWindow>, TimeParseError>> {
        self.bounds()
            .map(|(start, end)| TimeWindow::parse(start, end))
    }
}

/// Insertion-ordered day label → [`DaySlot`] mapping.
///
/// Labels are matched through [`day_key`]: inserting `"MIERCOLES"` into a
/// schedule that already holds `"Miércoles"` replaces that slot in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: Vec<(String, DaySlot)>,
}

impl WeeklySchedule {
    /// Creates an empty schedule (no days).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fully specified day.
    pub fn with_day(
        mut self,
        label: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.insert(label, DaySlot::new(start, end));
        self
    }

    /// Adds a day with an arbitrary (possibly incomplete) slot.
    pub fn with_slot(mut self, label: impl Into<String>, slot: DaySlot) -> Self {
        self.insert(label, slot);
        self
    }

    /// Adds a day from a typed weekday and window.
    pub fn with_window(mut self, day: WeekDay, window: TimeWindow) -> Self {
        self.insert(day.name(), DaySlot::from_window(window));
        self
    }

    /// Inserts or replaces a day. Returns the previous slot for that day.
    pub fn insert(&mut self, label: impl Into<String>, slot: DaySlot) -> Option<DaySlot> {
        let label = label.into();
        let key = day_key(&label);
        match self.days.iter_mut().find(|(l, _)| day_key(l) == key) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, slot)),
            None => {
                self.days.push((label, slot));
                None
            }
        }
    }

    /// Removes a day (matched by normalization key).
    pub fn remove(&mut self, label: &str) -> Option<DaySlot> {
        let key = day_key(label);
        let pos = self.days.iter().position(|(l, _)| day_key(l) == key)?;
        Some(self.days.remove(pos).1)
    }

    /// Looks up a day by normalization key. Returns the stored label and slot.
    pub fn get(&self, label: &str) -> Option<(&str, &DaySlot)> {
        let key = day_key(label);
        self.days
            .iter()
            .find(|(l, _)| day_key(l) == key)
            .map(|(l, s)| (l.as_str(), s))
    }

    /// Looks up a day by key, falling back to weekday identity across
    /// languages (`"Monday"` finds `"Lunes"`).
    pub fn resolve(&self, label: &str) -> Option<(&str, &DaySlot)> {
        self.get(label).or_else(|| {
            let day = WeekDay::from_label(label)?;
            self.days
                .iter()
                .find(|(l, _)| WeekDay::from_label(l) == Some(day))
                .map(|(l, s)| (l.as_str(), s))
        })
    }

    /// Days in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DaySlot)> {
        self.days.iter().map(|(l, s)| (l.as_str(), s))
    }

    /// Number of days present.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no day is present.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, DaySlot)> for WeeklySchedule {
    fn from_iter<I: IntoIterator<Item = (L, DaySlot)>>(iter: I) -> Self {
        let mut schedule = Self::new();
        for (label, slot) in iter {
            schedule.insert(label, slot);
        }
        schedule
    }
}

impl Serialize for WeeklySchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (label, slot) in &self.days {
            map.serialize_entry(label, slot)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeeklySchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScheduleVisitor;

        impl<'de> Visitor<'de> for ScheduleVisitor {
            type Value = WeeklySchedule;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of day label to {start, end}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut schedule = WeeklySchedule::new();
                // Form state stores unselected days as null
                while let Some((label, slot)) = access.next_entry::<String, Option<DaySlot>>()? {
                    if let Some(slot) = slot {
                        schedule.insert(label, slot);
                    }
                }
                Ok(schedule)
            }
        }

        deserializer.deserialize_map(ScheduleVisitor)
    }
}
