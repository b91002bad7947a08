//! Explicit per-user application state.
//!
//! [`AppState`] owns the profile store, roster, session registry and catalog
//! of one running session and exposes the user-facing commands and queries.
//! Each test can build its own isolated instance.

use crate::catalog::Catalog;
use crate::error::{CoreError, Result};
use crate::matcher::{find_matches_with, MatchResult, MatchWeights};
use crate::profile::{Profile, ProfileDraft, ProfileStore};
use crate::roster::Roster;
use crate::session::{JoinOutcome, SessionId, SessionRegistry, StudySession};
use crate::storage::{Config, Defaults};

#[derive(Debug, Clone)]
pub struct AppState {
    defaults: Defaults,
    weights: MatchWeights,
    catalog: Catalog,
    roster: Roster,
    profiles: ProfileStore,
    sessions: SessionRegistry,
}

impl AppState {
    /// Seed the state from configuration. No profile is saved yet.
    pub fn new(config: Config) -> Self {
        Self {
            defaults: config.defaults,
            weights: config.weights,
            catalog: config.catalog,
            roster: Roster::new(config.roster),
            profiles: ProfileStore::new(),
            sessions: SessionRegistry::with_sessions(config.sessions),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profiles.get()
    }

    /// Save (or overwrite) the current profile.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] for values outside the catalog.
    pub fn save_profile<C: Into<String>>(
        &mut self,
        name: impl Into<String>,
        year: impl Into<String>,
        courses: impl IntoIterator<Item = C>,
        style: impl Into<String>,
        spot: impl Into<String>,
    ) -> Result<Profile> {
        let profile = Profile::new(name, year, courses, style, spot);
        self.profiles.save(profile, &self.catalog).cloned()
    }

    /// Save a profile collected field by field.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] for a missing field or a value
    /// outside the catalog.
    pub fn save_profile_draft(&mut self, draft: ProfileDraft) -> Result<Profile> {
        let profile = draft.into_profile()?;
        self.profiles.save(profile, &self.catalog).cloned()
    }

    /// Ranked matches for the current profile.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RequiresProfile`] before a profile is saved.
    pub fn find_matches(&self, same_year_only: bool) -> Result<Vec<MatchResult>> {
        let profile = self.profile().ok_or(CoreError::RequiresProfile)?;
        Ok(find_matches_with(
            profile,
            &self.roster,
            same_year_only,
            self.weights,
        ))
    }

    pub fn list_sessions(&self) -> &[StudySession] {
        self.sessions.list()
    }

    pub fn get_session(&self, id: SessionId) -> Option<&StudySession> {
        self.sessions.get(id)
    }

    /// Courses offered when starting a session, per the configured policy.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RequiresProfile`] before a profile is saved.
    pub fn course_choices(&self) -> Result<Vec<String>> {
        let profile = self.profile().ok_or(CoreError::RequiresProfile)?;
        Ok(self
            .catalog
            .course_choices(profile, self.defaults.course_choices))
    }

    /// Start a session hosted by the current profile.
    ///
    /// # Errors
    ///
    /// See [`SessionRegistry::create`].
    pub fn create_session(
        &mut self,
        course: &str,
        spot: &str,
        time: &str,
        max_group_size: u32,
    ) -> Result<StudySession> {
        self.sessions.create(
            self.profiles.get(),
            course,
            spot,
            time,
            max_group_size,
            &self.catalog,
        )
    }

    /// Join a session as the current profile.
    ///
    /// # Errors
    ///
    /// See [`SessionRegistry::join`].
    pub fn join_session(&mut self, session_id: SessionId) -> Result<JoinOutcome> {
        self.sessions.join(session_id, self.profiles.get())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
