use std::sync::{Arc, Mutex, MutexGuard};

use super::{JoinOutcome, SessionId, SessionRegistry, StudySession};
use crate::catalog::Catalog;
use crate::error::{CoreError, Result};
use crate::profile::Profile;

/// A session registry shared between several users.
///
/// Each create or join holds the lock for its whole check-then-act, so two
/// joiners can never both take the last spot.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<SessionRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: SessionRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionRegistry>> {
        self.inner.lock().map_err(|_| CoreError::LockPoisoned)
    }

    /// Snapshot of all sessions in creation order.
    pub fn list(&self) -> Result<Vec<StudySession>> {
        Ok(self.lock()?.list().to_vec())
    }

    pub fn get(&self, id: SessionId) -> Result<Option<StudySession>> {
        Ok(self.lock()?.get(id).cloned())
    }

    /// See [`SessionRegistry::create`].
    pub fn create(
        &self,
        profile: Option<&Profile>,
        course: &str,
        spot: &str,
        time: &str,
        max_group_size: u32,
        catalog: &Catalog,
    ) -> Result<StudySession> {
        self.lock()?
            .create(profile, course, spot, time, max_group_size, catalog)
    }

    /// See [`SessionRegistry::join`].
    pub fn join(&self, session_id: SessionId, profile: Option<&Profile>) -> Result<JoinOutcome> {
        self.lock()?.join(session_id, profile)
    }
}
