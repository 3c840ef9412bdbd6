use async_trait::async_trait;

use crate::domain::scan::category::ScanCategory;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScanRecord;
use crate::domain::shared::value_objects::SessionId;

pub struct SubmitScanParams {
    pub session_id: SessionId,
    pub image_base64: String,
    pub category: ScanCategory,
}

#[async_trait]
pub trait SubmitScanUseCase: Send + Sync {
    async fn execute(&self, params: SubmitScanParams) -> Result<ScanRecord, ScanError>;
}
