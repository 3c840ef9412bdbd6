use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScanRecord;
use crate::domain::shared::value_objects::SessionId;

pub struct GetScanByIdParams {
    pub id: Uuid,
    pub session_id: SessionId,
}

#[async_trait]
pub trait GetScanByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetScanByIdParams) -> Result<ScanRecord, ScanError>;
}
