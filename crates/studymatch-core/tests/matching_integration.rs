//! Integration tests for buddy matching.

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use studymatch_core::{find_matches, seed, AppState, Config, Profile, Roster};

fn profile_strategy() -> impl Strategy<Value = Profile> {
    let catalog = seed::default_catalog();
    (
        select(vec!["Emma", "Noah", "Kai", "Riley", "Alex"]),
        select(catalog.years.clone()),
        subsequence(catalog.courses.clone(), 0..=3),
        select(catalog.styles.clone()),
        select(catalog.spots.clone()),
    )
        .prop_map(|(name, year, courses, style, spot)| {
            Profile::new(name, year, courses, style, spot)
        })
}

fn roster_strategy() -> impl Strategy<Value = Roster> {
    prop::collection::vec(profile_strategy(), 0..10).prop_map(Roster::new)
}

proptest! {
    #[test]
    fn never_matches_self(profile in profile_strategy(), roster in roster_strategy(), same_year in any::<bool>()) {
        let results = find_matches(&profile, &roster, same_year);
        prop_assert!(results.iter().all(|r| r.name != profile.name));
    }

    #[test]
    fn scores_follow_formula(profile in profile_strategy(), roster in roster_strategy()) {
        for result in find_matches(&profile, &roster, false) {
            prop_assert!(!result.shared_courses.is_empty());
            prop_assert_eq!(result.score, result.score_breakdown().total());

            let shared: BTreeSet<&String> = result.shared_courses.iter().collect();
            let explained = roster.iter().any(|candidate| {
                let expected: BTreeSet<&String> =
                    profile.courses.intersection(&candidate.courses).collect();
                let style_bonus = u32::from(candidate.style == profile.style);
                let spot_bonus = u32::from(candidate.spot == profile.spot);
                candidate.name == result.name
                    && candidate.year == result.year
                    && shared == expected
                    && result.score == 2 * expected.len() as u32 + style_bonus + spot_bonus
            });
            prop_assert!(explained, "no roster entry explains {:?}", result);
        }
    }

    #[test]
    fn shared_courses_sorted(profile in profile_strategy(), roster in roster_strategy()) {
        for result in find_matches(&profile, &roster, false) {
            let mut sorted = result.shared_courses.clone();
            sorted.sort();
            prop_assert_eq!(&result.shared_courses, &sorted);
        }
    }

    #[test]
    fn scores_non_increasing(profile in profile_strategy(), roster in roster_strategy(), same_year in any::<bool>()) {
        let results = find_matches(&profile, &roster, same_year);
        prop_assert!(results.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }

    #[test]
    fn same_year_is_subset(profile in profile_strategy(), roster in roster_strategy()) {
        let all: BTreeSet<String> = find_matches(&profile, &roster, false).into_iter().map(|r| r.name).collect();
        let same_year: BTreeSet<String> = find_matches(&profile, &roster, true).into_iter().map(|r| r.name).collect();
        prop_assert!(same_year.is_subset(&all));
    }

    #[test]
    fn repeated_queries_agree(profile in profile_strategy(), roster in roster_strategy(), same_year in any::<bool>()) {
        let first = find_matches(&profile, &roster, same_year);
        let second = find_matches(&profile, &roster, same_year);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_courses_never_match(profile in profile_strategy(), roster in roster_strategy()) {
        let mut profile = profile;
        profile.courses.clear();
        prop_assert!(find_matches(&profile, &roster, false).is_empty());
    }
}

#[test]
fn equal_scores_keep_roster_order() {
    let roster = Roster::new(vec![
        Profile::new("Zed", "27", ["CS1"], "quiet", "Sanborn"),
        Profile::new("Amy", "27", ["CS1"], "quiet", "Sanborn"),
        Profile::new("Max", "27", ["CS1", "MATH3"], "quiet", "Sanborn"),
        Profile::new("Bea", "27", ["CS1"], "quiet", "Sanborn"),
    ]);
    let profile = Profile::new("Kai", "27", ["CS1", "MATH3"], "talk", "Berry Library");

    let names: Vec<_> = find_matches(&profile, &roster, true)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["Max", "Zed", "Amy", "Bea"]);
}

#[test]
fn full_matching_workflow_with_default_config() {
    let mut state = AppState::new(Config::default());

    state
        .save_profile("Alex", "27", ["CS1"], "talk", "Novak Café")
        .unwrap();
    let same_year = state.find_matches(true).unwrap();
    assert_eq!(same_year.len(), 2);
    assert_eq!(same_year[0].name, "Emma");
    assert_eq!(same_year[1].name, "Sophie");
    assert!(same_year.iter().all(|m| m.score == 2));

    // Adding MATH3 lifts Emma above Sophie and brings in Maya across years.
    state
        .save_profile("Alex", "27", ["CS1", "MATH3"], "talk", "Novak Café")
        .unwrap();
    let all_years = state.find_matches(false).unwrap();
    let ranked: Vec<_> = all_years.iter().map(|m| (m.name.as_str(), m.score)).collect();
    assert_eq!(
        ranked,
        [("Emma", 4), ("Noah", 4), ("Maya", 2), ("Sophie", 2)]
    );
}
