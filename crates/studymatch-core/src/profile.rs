//! The acting user's profile.
//!
//! A profile does not exist until it is saved, and every save replaces it
//! wholesale. Roster entries share the same shape.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{Catalog, CatalogSet};
use crate::error::{CoreError, Result};

/// Self-declared attributes used for identity and matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Identity for matching and session membership. May be empty.
    pub name: String,
    /// Class year, e.g. "27".
    pub year: String,
    /// Courses, kept sorted and free of duplicates.
    #[serde(default)]
    pub courses: BTreeSet<String>,
    /// Study style, e.g. "quiet" or "talk".
    pub style: String,
    /// Favorite campus spot.
    pub spot: String,
}

/// A roster candidate has exactly the shape of a profile.
pub type RosterEntry = Profile;

impl Profile {
    pub fn new<C: Into<String>>(
        name: impl Into<String>,
        year: impl Into<String>,
        courses: impl IntoIterator<Item = C>,
        style: impl Into<String>,
        spot: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            year: year.into(),
            courses: courses.into_iter().map(Into::into).collect(),
            style: style.into(),
            spot: spot.into(),
        }
    }

    /// Matching needs at least one course.
    pub fn is_ready_for_matching(&self) -> bool {
        !self.courses.is_empty()
    }

    /// Check every attribute against the catalog. Name and course list may
    /// be empty.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] for the first value outside its set.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        catalog.check(CatalogSet::Year, &self.year)?;
        for course in &self.courses {
            catalog.check(CatalogSet::Course, course)?;
        }
        catalog.check(CatalogSet::Style, &self.style)?;
        catalog.check(CatalogSet::Spot, &self.spot)?;
        Ok(())
    }
}

/// Profile fields as collected from a form; any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub courses: Option<Vec<String>>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub spot: Option<String>,
}

impl ProfileDraft {
    /// Turn the draft into a profile.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] naming the first missing field.
    pub fn into_profile(self) -> Result<Profile> {
        fn required<T>(value: Option<T>, field: &str) -> Result<T> {
            value.ok_or_else(|| CoreError::invalid(field, "required field is missing"))
        }

        Ok(Profile::new(
            required(self.name, "name")?,
            required(self.year, "year")?,
            required(self.courses, "courses")?,
            required(self.style, "style")?,
            required(self.spot, "spot")?,
        ))
    }
}

/// Holds the single current profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    current: Option<Profile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current profile.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if a value is not in the catalog;
    /// the previous profile is kept in that case.
    pub fn save(&mut self, profile: Profile, catalog: &Catalog) -> Result<&Profile> {
        profile.validate(catalog)?;
        info!(
            name = %profile.name,
            year = %profile.year,
            courses = profile.courses.len(),
            "profile saved"
        );
        Ok(self.current.insert(profile))
    }

    pub fn get(&self) -> Option<&Profile> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn alex() -> Profile {
        Profile::new("Alex", "27", ["CS1"], "talk", "Novak Café")
    }

    #[test]
    fn store_starts_empty() {
        assert!(ProfileStore::new().get().is_none());
    }

    #[test]
    fn save_overwrites_previous_profile() {
        let catalog = seed::default_catalog();
        let mut store = ProfileStore::new();
        store.save(alex(), &catalog).unwrap();
        store
            .save(
                Profile::new("Riley", "25", ["BIO11"], "quiet", "Sanborn"),
                &catalog,
            )
            .unwrap();

        let current = store.get().unwrap();
        assert_eq!(current.name, "Riley");
        assert_eq!(current.courses.len(), 1);
    }

    #[test]
    fn save_accepts_empty_name_and_courses() {
        let catalog = seed::default_catalog();
        let mut store = ProfileStore::new();
        let empty: [&str; 0] = [];
        let saved = store
            .save(Profile::new("", "26", empty, "quiet", "Sanborn"), &catalog)
            .unwrap();
        assert!(!saved.is_ready_for_matching());
    }

    #[test]
    fn rejected_save_keeps_previous_profile() {
        let catalog = seed::default_catalog();
        let mut store = ProfileStore::new();
        store.save(alex(), &catalog).unwrap();

        let result = store.save(
            Profile::new("Alex", "27", ["CS101"], "talk", "Novak Café"),
            &catalog,
        );
        assert!(matches!(result, Err(CoreError::InvalidInput { ref field, .. }) if field == "course"));
        assert_eq!(store.get(), Some(&alex()));
    }

    #[test]
    fn duplicate_courses_collapse() {
        let profile = Profile::new("Alex", "27", ["CS1", "CS1", "MATH3"], "talk", "Sanborn");
        assert_eq!(profile.courses.len(), 2);
    }

    #[test]
    fn draft_reports_missing_field() {
        let draft = ProfileDraft {
            name: Some("Alex".into()),
            year: Some("27".into()),
            courses: Some(vec!["CS1".into()]),
            style: None,
            spot: Some("Sanborn".into()),
        };
        let err = draft.into_profile().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput { ref field, .. } if field == "style"));
    }

    #[test]
    fn complete_draft_builds_profile() {
        let draft = ProfileDraft {
            name: Some("Alex".into()),
            year: Some("27".into()),
            courses: Some(vec!["CS1".into()]),
            style: Some("talk".into()),
            spot: Some("Novak Café".into()),
        };
        assert_eq!(draft.into_profile().unwrap(), alex());
    }
}
