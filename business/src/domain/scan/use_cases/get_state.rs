use async_trait::async_trait;

use crate::domain::scan::errors::ScanError;
use crate::domain::scan::session::ScanState;
use crate::domain::shared::value_objects::SessionId;

pub struct GetScanStateParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait GetScanStateUseCase: Send + Sync {
    async fn execute(&self, params: GetScanStateParams) -> Result<ScanState, ScanError>;
}
