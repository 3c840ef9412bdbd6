use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::scan::repository::ScanSessionRepository;
use business::domain::scan::session::ScanSession;
use business::domain::shared::value_objects::SessionId;

pub const DEFAULT_SESSION_CAPACITY: usize = 10_000;

struct StoredSession {
    session: Arc<ScanSession>,
    last_used: AtomicU64,
}

impl StoredSession {
    /// Nobody outside the store holds the session and no scan is running.
    fn is_evictable(&self) -> bool {
        Arc::strong_count(&self.session) == 1 && !self.session.is_in_flight()
    }
}

/// Process-local session store. Sessions and their history vanish on restart.
///
/// At capacity, a new session replaces the least recently used one that is
/// idle and not referenced by any request.
pub struct ScanSessionRepositoryInMemory {
    sessions: RwLock<HashMap<SessionId, StoredSession>>,
    capacity: usize,
    clock: AtomicU64,
}

impl ScanSessionRepositoryInMemory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }

    /// Store holding at most `capacity` live sessions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            capacity,
            clock: AtomicU64::new(0),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn use_session(&self, stored: &StoredSession) -> Arc<ScanSession> {
        stored.last_used.store(self.tick(), Ordering::Relaxed);
        Arc::clone(&stored.session)
    }

    fn evict_least_recently_used(sessions: &mut HashMap<SessionId, StoredSession>) -> bool {
        let victim = sessions
            .iter()
            .filter(|(_, stored)| stored.is_evictable())
            .min_by_key(|(_, stored)| stored.last_used.load(Ordering::Relaxed))
            .map(|(id, _)| id.clone());

        match victim.and_then(|id| sessions.remove(&id)) {
            Some(stored) => {
                stored.session.end();
                true
            }
            None => false,
        }
    }
}

impl Default for ScanSessionRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScanSessionRepository for ScanSessionRepositoryInMemory {
    async fn get_or_create(&self, id: &SessionId) -> Result<Arc<ScanSession>, RepositoryError> {
        if let Some(stored) = self.sessions.read().await.get(id) {
            return Ok(self.use_session(stored));
        }

        let mut sessions = self.sessions.write().await;
        // Another request may have created it between the two locks.
        if let Some(stored) = sessions.get(id) {
            return Ok(self.use_session(stored));
        }
        if sessions.len() >= self.capacity && !Self::evict_least_recently_used(&mut sessions) {
            return Err(RepositoryError::capacity_exceeded());
        }

        let session = Arc::new(ScanSession::new(id.clone()));
        sessions.insert(
            id.clone(),
            StoredSession {
                session: Arc::clone(&session),
                last_used: AtomicU64::new(self.tick()),
            },
        );
        Ok(session)
    }

    async fn find(&self, id: &SessionId) -> Result<Option<Arc<ScanSession>>, RepositoryError> {
        Ok(self
            .sessions
            .read()
            .await
            .get(id)
            .map(|stored| self.use_session(stored)))
    }

    async fn remove(&self, id: &SessionId) -> Result<bool, RepositoryError> {
        match self.sessions.write().await.remove(id) {
            Some(stored) => {
                stored.session.end();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
