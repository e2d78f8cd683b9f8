//! Candidate ranking and tutor recommendation.
//!
//! Filters tutors to those whose verdict is compatible and orders them by
//! a chain of ranking rules. The first candidate is the recommended tutor.
//!
//! # Usage
//!
//! ```
//! use tutor_schedule::models::WeeklySchedule;
//! use tutor_schedule::ranking::{recommend, Candidate};
//!
//! let course = WeeklySchedule::new().with_day("Lunes", "10:00", "11:00");
//! let open = WeeklySchedule::new().with_day("Lunes", "08:00", "12:00");
//!
//! let candidates = [
//!     Candidate::new("t2", "Beatriz", &open),
//!     Candidate::new("t1", "Ana", &open),
//! ];
//! assert_eq!(recommend(&course, &candidates), Some("t1".to_string()));
//! assert_eq!(recommend(&course, &[]), None);
//! ```
//!
//! Rankings are recomputed on every call. Nothing is cached, so a changed
//! roster or course schedule can never yield a stale recommendation.

mod engine;
pub mod rules;

pub use engine::Recommender;

use std::cmp::Ordering;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::models::{CourseScheduleRequirement, Tutor, TutorAvailability};

/// A tutor offered for ranking, borrowed from the caller's roster.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub id: &'a str,
    pub display_name: &'a str,
    pub availability: &'a TutorAvailability,
}

impl<'a> Candidate<'a> {
    pub fn new(id: &'a str, display_name: &'a str, availability: &'a TutorAvailability) -> Self {
        Self {
            id,
            display_name,
            availability,
        }
    }
}

impl<'a> From<&'a Tutor> for Candidate<'a> {
    fn from(tutor: &'a Tutor) -> Self {
        Self::new(&tutor.id, &tutor.name, &tutor.availability)
    }
}

/// A compatible candidate with the figures ranking rules compare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    pub display_name: String,
    /// Availability minutes left over around the course's sessions,
    /// summed over the week.
    pub slack_minutes: u32,
}

/// A rule that orders two compatible candidates.
///
/// `Ordering::Less` means `a` is preferred. Rules return `Equal` to defer to
/// the next rule in the chain.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "NAME").
    fn name(&self) -> &'static str;

    /// Compares two candidates.
    fn compare(&self, a: &RankedCandidate, b: &RankedCandidate) -> Ordering;
}

/// Compatible candidates in recommendation order, using the default
/// recommender (alphabetical by display name).
pub fn rank_candidates(
    course: &CourseScheduleRequirement,
    candidates: &[Candidate<'_>],
) -> Vec<RankedCandidate> {
    Recommender::default().rank(course, candidates)
}

/// Recommended tutor id, or `None` if no candidate is compatible.
pub fn recommend(
    course: &CourseScheduleRequirement,
    candidates: &[Candidate<'_>],
) -> Option<String> {
    Recommender::default().recommend(course, candidates)
}

/// Convenience over a roster: active tutors only.
pub fn recommend_tutor<'a>(
    course: &CourseScheduleRequirement,
    roster: &'a [Tutor],
) -> Option<&'a Tutor> {
    let active: Vec<&Tutor> = roster.iter().filter(|t| t.active).collect();
    let candidates: Vec<Candidate<'_>> = active.iter().map(|t| Candidate::from(*t)).collect();
    let best = Recommender::default().select_best(course, &candidates)?;
    Some(active[best])
}
