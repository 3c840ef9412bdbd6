use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ScanError;
use super::model::ScanRecord;
use crate::domain::shared::value_objects::SessionId;

/// Where a session stands in the scan lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanState {
    Idle,
    AwaitingProvider,
    Parsing,
    Recorded,
    Failed,
}

impl ScanState {
    /// Whether a new scan may start from this state.
    pub fn accepts_submission(&self) -> bool {
        matches!(self, ScanState::Idle | ScanState::Recorded)
    }
}

impl std::fmt::Display for ScanState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanState::Idle => write!(f, "idle"),
            ScanState::AwaitingProvider => write!(f, "awaiting_provider"),
            ScanState::Parsing => write!(f, "parsing"),
            ScanState::Recorded => write!(f, "recorded"),
            ScanState::Failed => write!(f, "failed"),
        }
    }
}

struct SessionData {
    state: ScanState,
    history: Vec<ScanRecord>,
    ended: bool,
}

/// Per-session scan context: the state machine plus the history it feeds.
///
/// History is ordered most recent first and lives as long as the session.
pub struct ScanSession {
    id: SessionId,
    data: Mutex<SessionData>,
}

impl ScanSession {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            data: Mutex::new(SessionData {
                state: ScanState::Idle,
                history: Vec::new(),
                ended: false,
            }),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> ScanState {
        self.lock().state
    }

    pub fn history(&self) -> Vec<ScanRecord> {
        self.lock().history.clone()
    }

    pub fn history_len(&self) -> usize {
        self.lock().history.len()
    }

    pub fn find(&self, id: Uuid) -> Option<ScanRecord> {
        self.lock()
            .history
            .iter()
            .find(|record| record.id == id)
            .cloned()
    }

    /// Whether a scan of this session is between submission and outcome.
    pub fn is_in_flight(&self) -> bool {
        !self.lock().state.accepts_submission()
    }

    /// Marks the session as ended and drops its history.
    ///
    /// A scan still in flight can no longer record into it.
    pub fn end(&self) {
        let mut data = self.lock();
        data.ended = true;
        data.history.clear();
    }

    /// Moves the session to `AwaitingProvider`.
    ///
    /// Fails with [`ScanError::InProgress`] while another scan of this
    /// session is in flight, and with [`ScanError::SessionEnded`] once the
    /// session was ended.
    pub fn begin_scan(self: &Arc<Self>) -> Result<InFlightScan, ScanError> {
        let mut data = self.lock();
        if data.ended {
            return Err(ScanError::SessionEnded);
        }
        if !data.state.accepts_submission() {
            return Err(ScanError::InProgress);
        }
        data.state = ScanState::AwaitingProvider;

        Ok(InFlightScan {
            session: Arc::clone(self),
            settled: false,
        })
    }

    fn lock(&self) -> MutexGuard<'_, SessionData> {
        // Every critical section leaves the data consistent, so a poisoned
        // lock is still safe to use.
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle on the scan currently in flight for a session.
///
/// Dropping it without settling (for example when the request future is
/// cancelled) puts the session back to `Idle`.
pub struct InFlightScan {
    session: Arc<ScanSession>,
    settled: bool,
}

impl InFlightScan {
    pub fn session_id(&self) -> &SessionId {
        self.session.id()
    }

    /// Provider answered; parsing starts.
    pub fn start_parsing(&self) {
        self.session.lock().state = ScanState::Parsing;
    }

    /// Prepends the record to the history and moves to `Recorded`.
    ///
    /// Fails with [`ScanError::SessionEnded`] when the session was ended
    /// while the scan was in flight; the record is discarded.
    pub fn record(mut self, record: ScanRecord) -> Result<ScanRecord, ScanError> {
        self.settled = true;
        let mut data = self.session.lock();
        if data.ended {
            data.state = ScanState::Idle;
            return Err(ScanError::SessionEnded);
        }
        data.history.insert(0, record.clone());
        data.state = ScanState::Recorded;
        Ok(record)
    }

    /// Abandons the scan; history is left as it was and the session is
    /// ready for a retry. Returns the state the scan ended in.
    pub fn fail(mut self) -> ScanState {
        self.session.lock().state = ScanState::Idle;
        self.settled = true;
        ScanState::Failed
    }
}

impl Drop for InFlightScan {
    fn drop(&mut self) {
        if !self.settled {
            self.session.lock().state = ScanState::Idle;
        }
    }
}
