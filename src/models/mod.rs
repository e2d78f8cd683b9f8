//! Tutoring-academy scheduling models.
//!
//! Provides the value types the compatibility engine consumes: weekdays,
//! wall-clock times and windows, weekly schedules, tutors and courses.
//!
//! # Domain Mappings
//!
//! | Model | Academy concept |
//! |-------|-----------------|
//! | `WeeklySchedule` | course meeting times / tutor availability |
//! | `DaySlot` | one day's `{start, end}` as typed in a form |
//! | `Tutor` | roster entry that can be assigned |
//! | `Course` | course draft being staffed |

mod availability;
mod course;
mod time;
mod tutor;
mod weekday;

pub use availability::{CourseScheduleRequirement, DaySlot, TutorAvailability, WeeklySchedule};
pub use course::Course;
pub use time::{parse_minutes, TimeOfDay, TimeWindow, MINUTES_PER_DAY};
pub use tutor::Tutor;
pub use weekday::{day_key, WeekDay};

pub(crate) use weekday::fold;
