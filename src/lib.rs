//! Tutor/course schedule compatibility for a tutoring academy.
//!
//! Given the weekdays and hours a course meets and a tutor's declared
//! weekly availability, decides whether the tutor can take the course and
//! explains every day that does not fit. Also ranks compatible tutors to
//! recommend one.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `WeekDay`, `TimeOfDay`, `TimeWindow`,
//!   `DaySlot`, `WeeklySchedule`, `Tutor`, `Course`
//! - **`compat`**: `check_compatibility` and `CompatibilityVerdict`
//! - **`ranking`**: `recommend`, `Recommender`, ranking rules
//! - **`filter`**: roster search composed with "only compatible"
//! - **`validation`**: schedule integrity checks and the assignment gate
//! - **`config`**: message texts and leniency policy
//!
//! # Architecture
//!
//! Everything is pure and synchronous. Inputs are borrowed, outputs are
//! freshly allocated, and no state is kept between calls, so any function
//! may be called concurrently and re-run whenever its inputs change.
//! Logging goes through `tracing`; the host installs the subscriber.

pub mod compat;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod ranking;
pub mod validation;

pub use compat::{check_compatibility, CompatibilityVerdict};
pub use ranking::recommend;
