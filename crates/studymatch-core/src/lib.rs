//! # StudyMatch Core Library
//!
//! Business logic for StudyMatch, a small tool for finding study buddies and
//! joining study sessions. All operations are available through the
//! `studymatch` CLI, which is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Profile Store**: the single current user's profile, overwritten on save
//! - **Roster**: fixed candidate pool loaded from configuration
//! - **Matcher**: pure ranking of roster candidates by shared courses, study
//!   style and favorite spot
//! - **Session Registry**: ordered list of study sessions with create and join
//! - **Catalog**: injected closed sets of courses, spots, years, time slots
//!   and styles
//!
//! State is never global and never persisted: [`AppState`] bundles the pieces
//! for one running session.
//!
//! ## Key Components
//!
//! - [`AppState`]: per-session context exposing every command and query
//! - [`find_matches`]: the matcher
//! - [`SessionRegistry`] / [`SharedRegistry`]: session membership and capacity
//! - [`Config`]: TOML configuration with built-in fixtures

pub mod catalog;
pub mod error;
pub mod matcher;
pub mod profile;
pub mod roster;
pub mod seed;
pub mod session;
pub mod state;
pub mod storage;

pub use catalog::{Catalog, CatalogSet, CourseChoicePolicy};
pub use error::{ConfigError, CoreError, Result};
pub use matcher::{find_matches, find_matches_with, MatchResult, MatchWeights, ScoreBreakdown};
pub use profile::{Profile, ProfileDraft, ProfileStore, RosterEntry};
pub use roster::Roster;
pub use session::{JoinOutcome, SessionId, SessionRegistry, SharedRegistry, StudySession};
pub use state::AppState;
pub use storage::{Config, Defaults};
