//! Study sessions: scheduled meetings with bounded capacity.
//!
//! - [`SessionRegistry`]: ordered, single-owner list supporting create and join
//! - [`SharedRegistry`]: the same operations behind a mutex, for several users
//!   sharing one registry

mod registry;
mod shared;

pub use registry::{SessionRegistry, MAX_GROUP_SIZE, MIN_GROUP_SIZE};
pub use shared::SharedRegistry;

use serde::{Deserialize, Serialize};

/// Session identifier, assigned in increasing order.
pub type SessionId = u32;

/// A scheduled study meeting.
///
/// The host is always a member, names appear at most once, and
/// `capacity_remaining` only ever goes down by one per join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: SessionId,
    pub course: String,
    /// Name of the profile that created the session.
    pub host: String,
    pub spot: String,
    pub time: String,
    pub capacity_remaining: u32,
    pub members: Vec<String>,
}

impl StudySession {
    pub fn is_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    pub fn is_full(&self) -> bool {
        self.capacity_remaining == 0
    }
}

/// Result of a join that did not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "session", rename_all = "snake_case")]
pub enum JoinOutcome {
    /// The profile was added and one spot was used.
    Joined(StudySession),
    /// The profile was already a member; nothing changed.
    AlreadyMember(StudySession),
}

impl JoinOutcome {
    pub fn session(&self) -> &StudySession {
        match self {
            JoinOutcome::Joined(session) | JoinOutcome::AlreadyMember(session) => session,
        }
    }

    pub fn into_session(self) -> StudySession {
        match self {
            JoinOutcome::Joined(session) | JoinOutcome::AlreadyMember(session) => session,
        }
    }

    pub fn is_joined(&self) -> bool {
        matches!(self, JoinOutcome::Joined(_))
    }
}
