//! TOML-based configuration.
//!
//! Supplies everything the core treats as injected:
//! - The catalog of courses, spots, years, time slots and styles
//! - The roster fixture
//! - The sessions open at startup
//! - Defaults for the presentation layer and the match weights
//!
//! Looked up at `$STUDYMATCH_CONFIG`, then `~/.config/studymatch/config.toml`.
//! Missing sections fall back to the built-in fixtures in [`crate::seed`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{config_dir, CONFIG_ENV};
use crate::catalog::{Catalog, CatalogSet, CourseChoicePolicy};
use crate::error::{ConfigError, CoreError};
use crate::matcher::MatchWeights;
use crate::profile::RosterEntry;
use crate::seed;
use crate::session::{SessionId, StudySession, MAX_GROUP_SIZE, MIN_GROUP_SIZE};

/// Presentation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_max_group_size")]
    pub max_group_size: u32,
    #[serde(default = "default_true")]
    pub same_year_only: bool,
    #[serde(default)]
    pub course_choices: CourseChoicePolicy,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub weights: MatchWeights,
    #[serde(default = "seed::default_catalog")]
    pub catalog: Catalog,
    #[serde(default = "seed::default_roster_entries")]
    pub roster: Vec<RosterEntry>,
    #[serde(default = "seed::default_sessions")]
    pub sessions: Vec<StudySession>,
}

fn default_max_group_size() -> u32 {
    4
}
fn default_true() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            max_group_size: default_max_group_size(),
            same_year_only: true,
            course_choices: CourseChoicePolicy::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            weights: MatchWeights::default(),
            catalog: seed::default_catalog(),
            roster: seed::default_roster_entries(),
            sessions: seed::default_sessions(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = match current {
                serde_json::Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                other => other.get(part)?,
            };
        }
        Some(current)
    }

    /// Path the config is read from when no explicit path is given.
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| config_dir().join("config.toml"))
    }

    /// Parse and validate TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this schema or if
    /// [`Config::validate`] rejects it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "loading config");
        Self::from_toml_str(&content)
    }

    /// Load from [`Config::path`] or return the built-in defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "no config file, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Check the fixtures against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty catalog set, a
    /// roster entry or session using values outside the catalog, a session
    /// whose members are inconsistent, or an out-of-range default group size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, set) in [
            ("catalog.courses", CatalogSet::Course),
            ("catalog.spots", CatalogSet::Spot),
            ("catalog.years", CatalogSet::Year),
            ("catalog.time_slots", CatalogSet::TimeSlot),
            ("catalog.styles", CatalogSet::Style),
        ] {
            if self.catalog.values(set).is_empty() {
                return Err(invalid(key, "must not be empty"));
            }
        }

        if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&self.defaults.max_group_size) {
            return Err(invalid(
                "defaults.max_group_size",
                format!("must be within {MIN_GROUP_SIZE}..={MAX_GROUP_SIZE}"),
            ));
        }

        for entry in &self.roster {
            entry
                .validate(&self.catalog)
                .map_err(|e| from_core(&format!("roster.{}", entry.name), e))?;
        }

        let mut ids = HashSet::new();
        for session in &self.sessions {
            let key = format!("sessions.{}", session.id);
            if !ids.insert(session.id) {
                return Err(invalid(&key, "duplicate session id"));
            }
            // New sessions take the highest id plus one.
            if session.id == SessionId::MAX {
                return Err(invalid(&key, format!("id must be below {}", SessionId::MAX)));
            }
            self.check_session(session)
                .map_err(|e| from_core(&key, e))?;
            if !session.is_member(&session.host) {
                return Err(invalid(&key, "host must be a member"));
            }
            let unique: HashSet<&String> = session.members.iter().collect();
            if unique.len() != session.members.len() {
                return Err(invalid(&key, "members must be unique"));
            }
        }

        Ok(())
    }

    fn check_session(&self, session: &StudySession) -> Result<(), CoreError> {
        self.catalog.check(CatalogSet::Course, &session.course)?;
        self.catalog.check(CatalogSet::Spot, &session.spot)?;
        self.catalog.check(CatalogSet::TimeSlot, &session.time)?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key. Array elements
    /// are addressed by index, e.g. `roster.0.name`.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}

fn from_core(key: &str, err: CoreError) -> ConfigError {
    match err {
        CoreError::InvalidInput { field, message } => invalid(&format!("{key}.{field}"), message),
        other => invalid(key, other.to_string()),
    }
}
