use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ScanRecord;
use crate::domain::scan::repository::ScanSessionRepository;
use crate::domain::scan::use_cases::get_history::{GetScanHistoryParams, GetScanHistoryUseCase};

pub struct GetScanHistoryUseCaseImpl {
    pub sessions: Arc<dyn ScanSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetScanHistoryUseCase for GetScanHistoryUseCaseImpl {
    async fn execute(&self, params: GetScanHistoryParams) -> Result<Vec<ScanRecord>, ScanError> {
        self.logger.info(&format!(
            "Getting scan history for session {}",
            params.session_id
        ));

        let history = match self.sessions.find(&params.session_id).await? {
            Some(session) => session.history(),
            None => Vec::new(),
        };

        self.logger
            .info(&format!("Retrieved {} scans", history.len()));
        Ok(history)
    }
}
