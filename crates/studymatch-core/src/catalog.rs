//! Closed value sets injected from configuration.
//!
//! Courses, campus spots, class years, time slots and study styles are never
//! hard-coded in the matcher or the session registry. They come from a
//! [`Catalog`], which tests are free to swap for a smaller one.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::profile::Profile;

/// Which closed set a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSet {
    Course,
    Spot,
    Year,
    TimeSlot,
    Style,
}

impl CatalogSet {
    /// Field name used in error messages.
    pub fn field(self) -> &'static str {
        match self {
            CatalogSet::Course => "course",
            CatalogSet::Spot => "spot",
            CatalogSet::Year => "year",
            CatalogSet::TimeSlot => "time",
            CatalogSet::Style => "style",
        }
    }
}

/// Course list offered when creating a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseChoicePolicy {
    /// Only the profile's own courses. A profile without courses gets none.
    ProfileOnly,
    /// Every catalog course.
    All,
    /// The profile's courses, or every catalog course if it has none.
    #[default]
    ProfileOrAll,
}

/// The fixed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub courses: Vec<String>,
    pub spots: Vec<String>,
    pub years: Vec<String>,
    pub time_slots: Vec<String>,
    pub styles: Vec<String>,
}

impl Catalog {
    /// Values of one set.
    pub fn values(&self, set: CatalogSet) -> &[String] {
        match set {
            CatalogSet::Course => &self.courses,
            CatalogSet::Spot => &self.spots,
            CatalogSet::Year => &self.years,
            CatalogSet::TimeSlot => &self.time_slots,
            CatalogSet::Style => &self.styles,
        }
    }

    pub fn contains(&self, set: CatalogSet, value: &str) -> bool {
        self.values(set).iter().any(|v| v == value)
    }

    /// Reject a value that is not part of `set`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] naming the set's field.
    pub fn check(&self, set: CatalogSet, value: &str) -> Result<()> {
        if self.contains(set, value) {
            Ok(())
        } else {
            Err(CoreError::invalid(
                set.field(),
                format!(
                    "'{value}' is not one of: {}",
                    self.values(set).join(", ")
                ),
            ))
        }
    }

    /// Courses a user may pick when starting a session.
    pub fn course_choices(&self, profile: &Profile, policy: CourseChoicePolicy) -> Vec<String> {
        let own: Vec<String> = profile.courses.iter().cloned().collect();
        match policy {
            CourseChoicePolicy::ProfileOnly => own,
            CourseChoicePolicy::All => self.courses.clone(),
            CourseChoicePolicy::ProfileOrAll if own.is_empty() => self.courses.clone(),
            CourseChoicePolicy::ProfileOrAll => own,
        }
    }
}
