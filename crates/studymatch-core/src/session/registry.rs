use tracing::{info, warn};

use super::{JoinOutcome, SessionId, StudySession};
use crate::catalog::{Catalog, CatalogSet};
use crate::error::{CoreError, Result};
use crate::profile::Profile;

/// Smallest group a session can be created for (host plus one).
pub const MIN_GROUP_SIZE: u32 = 2;
/// Largest group a session can be created for.
pub const MAX_GROUP_SIZE: u32 = 8;

/// Ordered list of study sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Vec<StudySession>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from seeded sessions, kept in the given order.
    pub fn with_sessions(sessions: Vec<StudySession>) -> Self {
        Self { sessions }
    }

    /// All sessions in creation order.
    pub fn list(&self) -> &[StudySession] {
        &self.sessions
    }

    pub fn get(&self, id: SessionId) -> Option<&StudySession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    fn next_id(&self) -> Result<SessionId> {
        self.sessions
            .iter()
            .map(|s| s.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| CoreError::invalid("id", "no session ids left"))
    }

    /// Create a session hosted by `profile`.
    ///
    /// The course only has to be a catalog course, not one of the host's.
    ///
    /// # Errors
    ///
    /// - [`CoreError::RequiresProfile`] without a profile
    /// - [`CoreError::InvalidInput`] for a group size outside
    ///   [`MIN_GROUP_SIZE`]..=[`MAX_GROUP_SIZE`] or a non-catalog course,
    ///   spot or time, or when the session ids are exhausted
    pub fn create(
        &mut self,
        profile: Option<&Profile>,
        course: &str,
        spot: &str,
        time: &str,
        max_group_size: u32,
        catalog: &Catalog,
    ) -> Result<StudySession> {
        let host = profile.ok_or(CoreError::RequiresProfile)?;

        if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&max_group_size) {
            return Err(CoreError::invalid(
                "max_group_size",
                format!(
                    "{max_group_size} is outside {MIN_GROUP_SIZE}..={MAX_GROUP_SIZE}"
                ),
            ));
        }
        catalog.check(CatalogSet::Course, course)?;
        catalog.check(CatalogSet::Spot, spot)?;
        catalog.check(CatalogSet::TimeSlot, time)?;
        let id = self.next_id()?;

        let session = StudySession {
            id,
            course: course.to_string(),
            host: host.name.clone(),
            spot: spot.to_string(),
            time: time.to_string(),
            capacity_remaining: max_group_size - 1,
            members: vec![host.name.clone()],
        };
        info!(
            id = session.id,
            course = %session.course,
            host = %session.host,
            capacity = session.capacity_remaining,
            "session created"
        );

        self.sessions.push(session.clone());
        Ok(session)
    }

    /// Add `profile` to a session.
    ///
    /// Joining a session one already belongs to changes nothing and reports
    /// [`JoinOutcome::AlreadyMember`].
    ///
    /// # Errors
    ///
    /// - [`CoreError::RequiresProfile`] without a profile
    /// - [`CoreError::NotFound`] for an unknown id
    /// - [`CoreError::SessionFull`] when no capacity is left
    ///
    /// A rejected join leaves the session untouched.
    pub fn join(&mut self, session_id: SessionId, profile: Option<&Profile>) -> Result<JoinOutcome> {
        let joiner = profile.ok_or(CoreError::RequiresProfile)?;
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or(CoreError::NotFound { session_id })?;

        if session.is_member(&joiner.name) {
            return Ok(JoinOutcome::AlreadyMember(session.clone()));
        }
        if session.is_full() {
            warn!(id = session_id, name = %joiner.name, "join rejected, session full");
            return Err(CoreError::SessionFull { session_id });
        }

        session.members.push(joiner.name.clone());
        session.capacity_remaining -= 1;
        info!(
            id = session_id,
            name = %joiner.name,
            capacity = session.capacity_remaining,
            "joined session"
        );

        Ok(JoinOutcome::Joined(session.clone()))
    }
}
