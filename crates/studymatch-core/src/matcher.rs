//! Study buddy matching.
//!
//! Candidates must share at least one course with the profile. Among those,
//! the score rewards shared courses and agreement on study style and spot:
//!
//! ```text
//! score = 2 * |shared courses| + (same style ? 1 : 0) + (same spot ? 1 : 0)
//! ```
//!
//! Results are ordered by descending score; equal scores keep roster order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::Profile;
use crate::roster::Roster;

/// Weights of the score terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    /// Per shared course.
    pub course: u32,
    /// Bonus for the same study style.
    pub style: u32,
    /// Bonus for the same favorite spot.
    pub spot: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            course: 2,
            style: 1,
            spot: 1,
        }
    }
}

/// How a score was put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub courses: u32,
    pub style: u32,
    pub spot: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.courses + self.style + self.spot
    }
}

/// One ranked candidate. Derived on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub year: String,
    pub score: u32,
    /// Alphabetical.
    pub shared_courses: Vec<String>,
    pub style: String,
    pub spot: String,
    breakdown: ScoreBreakdown,
}

impl MatchResult {
    pub fn score_breakdown(&self) -> ScoreBreakdown {
        self.breakdown
    }
}

/// Rank roster candidates for `profile` with the default weights.
///
/// Never fails: a profile without courses simply matches nobody.
pub fn find_matches(profile: &Profile, roster: &Roster, same_year_only: bool) -> Vec<MatchResult> {
    find_matches_with(profile, roster, same_year_only, MatchWeights::default())
}

/// Rank roster candidates for `profile` with custom weights.
pub fn find_matches_with(
    profile: &Profile,
    roster: &Roster,
    same_year_only: bool,
    weights: MatchWeights,
) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = roster
        .iter()
        .filter(|candidate| candidate.name != profile.name)
        .filter(|candidate| !same_year_only || candidate.year == profile.year)
        .filter_map(|candidate| {
            // BTreeSet intersection yields courses in sorted order.
            let shared: Vec<String> = profile
                .courses
                .intersection(&candidate.courses)
                .cloned()
                .collect();
            if shared.is_empty() {
                return None;
            }

            let shared_count = u32::try_from(shared.len()).unwrap_or(u32::MAX);
            let breakdown = ScoreBreakdown {
                courses: weights.course.saturating_mul(shared_count),
                style: if candidate.style == profile.style {
                    weights.style
                } else {
                    0
                },
                spot: if candidate.spot == profile.spot {
                    weights.spot
                } else {
                    0
                },
            };

            Some(MatchResult {
                name: candidate.name.clone(),
                year: candidate.year.clone(),
                score: breakdown.total(),
                shared_courses: shared,
                style: candidate.style.clone(),
                spot: candidate.spot.clone(),
                breakdown,
            })
        })
        .collect();

    // stable: ties stay in roster order
    results.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        name = %profile.name,
        same_year_only,
        matches = results.len(),
        "computed matches"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn names(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn alex_same_year_matches_emma_then_sophie() {
        let alex = Profile::new("Alex", "27", ["CS1"], "talk", "Novak Café");
        let results = find_matches(&alex, &seed::default_roster(), true);

        assert_eq!(names(&results), ["Emma", "Sophie"]);
        assert!(results.iter().all(|r| r.score == 2));
        assert_eq!(results[0].shared_courses, ["CS1"]);
    }

    #[test]
    fn all_years_adds_noah_ranked_first() {
        let alex = Profile::new("Alex", "27", ["CS1"], "talk", "Novak Café");
        let results = find_matches(&alex, &seed::default_roster(), false);

        // Noah shares CS1, style and spot: 2 + 1 + 1
        assert_eq!(names(&results), ["Noah", "Emma", "Sophie"]);
        assert_eq!(results[0].score, 4);
        assert_eq!(
            results[0].score_breakdown(),
            ScoreBreakdown {
                courses: 2,
                style: 1,
                spot: 1
            }
        );
    }

    #[test]
    fn excludes_self_by_name() {
        let emma = Profile::new("Emma", "27", ["CS1", "MATH3"], "quiet", "Berry Library");
        let results = find_matches(&emma, &seed::default_roster(), false);
        assert!(!names(&results).contains(&"Emma"));
    }

    #[test]
    fn shared_courses_are_sorted() {
        let profile = Profile::new("Kai", "27", ["MATH3", "CS1"], "quiet", "Sanborn");
        let results = find_matches(&profile, &seed::default_roster(), true);
        let emma = results.iter().find(|r| r.name == "Emma").unwrap();
        assert_eq!(emma.shared_courses, ["CS1", "MATH3"]);
        assert_eq!(emma.score, 5);
    }

    #[test]
    fn no_courses_means_no_matches() {
        let empty: [&str; 0] = [];
        let profile = Profile::new("Kai", "27", empty, "quiet", "Berry Library");
        assert!(find_matches(&profile, &seed::default_roster(), false).is_empty());
    }

    #[test]
    fn style_and_spot_alone_do_not_qualify() {
        let profile = Profile::new("Kai", "25", ["ENGS21"], "quiet", "Sanborn");
        // Lily shares style and spot but no course.
        let results = find_matches(&profile, &seed::default_roster(), true);
        assert!(results.is_empty());
    }

    #[test]
    fn custom_weights_change_ranking_inputs() {
        let alex = Profile::new("Alex", "27", ["CS1"], "talk", "Novak Café");
        let weights = MatchWeights {
            course: 1,
            style: 0,
            spot: 5,
        };
        let results = find_matches_with(&alex, &seed::default_roster(), false, weights);
        assert_eq!(results[0].name, "Noah");
        assert_eq!(results[0].score, 6);
    }
}
