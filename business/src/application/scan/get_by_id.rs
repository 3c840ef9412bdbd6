use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScanRecord;
use crate::domain::scan::repository::ScanSessionRepository;
use crate::domain::scan::use_cases::get_by_id::{GetScanByIdParams, GetScanByIdUseCase};

pub struct GetScanByIdUseCaseImpl {
    pub sessions: Arc<dyn ScanSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetScanByIdUseCase for GetScanByIdUseCaseImpl {
    async fn execute(&self, params: GetScanByIdParams) -> Result<ScanRecord, ScanError> {
        self.logger.info(&format!("Fetching scan by id: {}", params.id));

        self.sessions
            .find(&params.session_id)
            .await?
            .and_then(|session| session.find(params.id))
            .ok_or(ScanError::NotFound)
    }
}
