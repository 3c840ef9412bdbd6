use async_trait::async_trait;

use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScanRecord;
use crate::domain::shared::value_objects::SessionId;

pub struct GetScanHistoryParams {
    pub session_id: SessionId,
}

#[async_trait]
pub trait GetScanHistoryUseCase: Send + Sync {
    async fn execute(&self, params: GetScanHistoryParams) -> Result<Vec<ScanRecord>, ScanError>;
}
