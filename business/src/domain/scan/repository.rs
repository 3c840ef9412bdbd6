use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::session::ScanSession;

/// Store of live scan sessions. Nothing outlives the process.
#[async_trait]
pub trait ScanSessionRepository: Send + Sync {
    /// Returns the session, creating an empty one on first use.
    async fn get_or_create(&self, id: &SessionId) -> Result<Arc<ScanSession>, RepositoryError>;
    async fn find(&self, id: &SessionId) -> Result<Option<Arc<ScanSession>>, RepositoryError>;
    /// Ends the session and drops its history. Returns whether it existed.
    async fn remove(&self, id: &SessionId) -> Result<bool, RepositoryError>;
}
