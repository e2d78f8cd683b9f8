//! Recommender: compatibility filter plus a ranking rule chain.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use super::rules::DisplayName;
use super::{Candidate, RankedCandidate, RankingRule};
use crate::compat::check_compatibility_with;
use crate::config::MatchConfig;
use crate::models::{CourseScheduleRequirement, TutorAvailability};

/// Ranks compatible candidates by a sequence of rules.
///
/// Rules apply in order; the next rule is consulted only on ties. After
/// all rules, candidates are ordered by raw display name and then id so
/// the ranking is total.
///
/// # Example
/// ```
/// use tutor_schedule::ranking::rules;
/// use tutor_schedule::ranking::Recommender;
///
/// let recommender = Recommender::new()
///     .with_rule(rules::TightestFit)
///     .with_rule(rules::DisplayName);
/// ```
#[derive(Clone)]
pub struct Recommender {
    rules: Vec<Arc<dyn RankingRule>>,
    config: MatchConfig,
}

impl Recommender {
    /// Creates a recommender with no rules.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            config: MatchConfig::default(),
        }
    }

    /// Alphabetical by display name.
    pub fn alphabetical() -> Self {
        Self::new().with_rule(DisplayName)
    }

    /// Appends a rule.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the compatibility configuration.
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Compatible candidates, best first.
    pub fn rank(
        &self,
        course: &CourseScheduleRequirement,
        candidates: &[Candidate<'_>],
    ) -> Vec<RankedCandidate> {
        self.rank_indexed(course, candidates)
            .into_iter()
            .map(|(_, ranked)| ranked)
            .collect()
    }

    /// Compatible candidates, best first, each paired with its index into
    /// `candidates`.
    pub fn rank_indexed(
        &self,
        course: &CourseScheduleRequirement,
        candidates: &[Candidate<'_>],
    ) -> Vec<(usize, RankedCandidate)> {
        let mut ranked: Vec<(usize, RankedCandidate)> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                check_compatibility_with(course, c.availability, &self.config).compatible
            })
            .map(|(i, c)| {
                let ranked = RankedCandidate {
                    id: c.id.to_string(),
                    display_name: c.display_name.to_string(),
                    slack_minutes: weekly_slack(course, c.availability),
                };
                (i, ranked)
            })
            .collect();

        ranked.sort_by(|(ia, a), (ib, b)| self.compare(a, b).then_with(|| ia.cmp(ib)));

        debug!(
            candidates = candidates.len(),
            compatible = ranked.len(),
            "candidates ranked"
        );
        ranked
    }

    /// Index of the best compatible candidate.
    pub fn select_best(
        &self,
        course: &CourseScheduleRequirement,
        candidates: &[Candidate<'_>],
    ) -> Option<usize> {
        self.rank_indexed(course, candidates).first().map(|(i, _)| *i)
    }

    /// Id of the best compatible candidate.
    pub fn recommend(
        &self,
        course: &CourseScheduleRequirement,
        candidates: &[Candidate<'_>],
    ) -> Option<String> {
        let best = self
            .select_best(course, candidates)
            .map(|i| candidates[i].id.to_string());
        debug!(recommended = ?best, "recommendation");
        best
    }

    fn compare(&self, a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
        for rule in &self.rules {
            let ord = rule.compare(a, b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.display_name
            .cmp(&b.display_name)
            .then_with(|| a.id.cmp(&b.id))
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::alphabetical()
    }
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("config", &self.config)
            .finish()
    }
}

/// Spare availability minutes around the course's complete, readable days.
fn weekly_slack(course: &CourseScheduleRequirement, tutor: &TutorAvailability) -> u32 {
    course
        .iter()
        .filter_map(|(day, slot)| {
            let course_window = slot.window()?.ok()??;
            let tutor_window = tutor.resolve(day)?.1.window()?.ok()??;
            tutor_window.slack_minutes(&course_window)
        })
        .map(u32::from)
        .sum()
}
