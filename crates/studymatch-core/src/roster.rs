//! The fixed candidate pool.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::profile::RosterEntry;

/// Read-only list of candidates, in seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RosterEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with this name.
    pub fn find(&self, name: &str) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Every entry must only use catalog values.
    ///
    /// # Errors
    ///
    /// Returns the first entry's [`crate::CoreError::InvalidInput`].
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        self.entries.iter().try_for_each(|e| e.validate(catalog))
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a RosterEntry;
    type IntoIter = std::slice::Iter<'a, RosterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn default_roster_keeps_seed_order() {
        let roster = seed::default_roster();
        let names: Vec<_> = roster.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Emma", "Noah", "Lily", "Maya", "Alex", "Sophie"]);
    }

    #[test]
    fn default_roster_is_valid() {
        assert!(seed::default_roster()
            .validate(&seed::default_catalog())
            .is_ok());
    }

    #[test]
    fn find_by_name() {
        let roster = seed::default_roster();
        assert_eq!(roster.find("Lily").unwrap().spot, "Sanborn");
        assert!(roster.find("Nobody").is_none());
    }
}
