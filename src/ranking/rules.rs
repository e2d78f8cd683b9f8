//! Built-in ranking rules.
//!
//! All rules put the preferred candidate first (`Ordering::Less`).

use std::cmp::Ordering;

use super::{RankedCandidate, RankingRule};
use crate::models::fold;

/// Alphabetical by display name, ignoring case and accents.
///
/// `"Álvaro"` sorts with the a's, `"beatriz"` next to `"Beatriz"`.
///
/// This approximates Spanish collation by stripping diacritics, so `ñ`
/// sorts as `n` (`"Muñoz"` ties with `"Munoz"`) rather than as a letter of
/// its own after `n`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayName;

impl RankingRule for DisplayName {
    fn name(&self) -> &'static str {
        "NAME"
    }

    fn compare(&self, a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
        fold(a.display_name.trim()).cmp(&fold(b.display_name.trim()))
    }
}

/// Least spare availability first.
///
/// Prefers the tutor whose windows hug the course's sessions, keeping
/// tutors with wide availability free for other courses.
#[derive(Debug, Clone, Copy)]
pub struct TightestFit;

impl RankingRule for TightestFit {
    fn name(&self) -> &'static str {
        "TIGHTEST"
    }

    fn compare(&self, a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
        a.slack_minutes.cmp(&b.slack_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(id: &str, name: &str, slack: u32) -> RankedCandidate {
        RankedCandidate {
            id: id.to_string(),
            display_name: name.to_string(),
            slack_minutes: slack,
        }
    }

    #[test]
    fn test_display_name() {
        let rule = DisplayName;
        assert_eq!(rule.compare(&cand("1", "Ana", 0), &cand("2", "Beatriz", 0)), Ordering::Less);
        assert_eq!(rule.compare(&cand("1", "ÁNA", 0), &cand("2", "ana", 0)), Ordering::Equal);
        assert_eq!(
            rule.compare(&cand("1", "Óscar", 0), &cand("2", "Nora", 0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_display_name_folds_enye() {
        let rule = DisplayName;
        assert_eq!(
            rule.compare(&cand("1", "Muñoz", 0), &cand("2", "Munoz", 0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_tightest_fit() {
        let rule = TightestFit;
        assert_eq!(
            rule.compare(&cand("1", "Ana", 30), &cand("2", "Beatriz", 10)),
            Ordering::Greater
        );
        assert_eq!(
            rule.compare(&cand("1", "Ana", 10), &cand("2", "Beatriz", 10)),
            Ordering::Equal
        );
    }
}
