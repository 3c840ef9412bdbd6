use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::image::ScanImage;
use crate::domain::scan::model::ScanRecord;
use crate::domain::scan::parser::parse_scan_response;
use crate::domain::scan::repository::ScanSessionRepository;
use crate::domain::scan::services::AnalysisProviderService;
use crate::domain::scan::session::{InFlightScan, ScanState};
use crate::domain::scan::use_cases::submit::{SubmitScanParams, SubmitScanUseCase};

/// Runs one scan: provider call, parse, then prepend to the session history.
pub struct SubmitScanUseCaseImpl {
    pub provider: Arc<dyn AnalysisProviderService>,
    pub sessions: Arc<dyn ScanSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

impl SubmitScanUseCaseImpl {
    fn abort(&self, scan: InFlightScan, err: ScanError) -> ScanError {
        let session_id = scan.session_id().clone();
        let ended_in = scan.fail();
        self.logger.error(&format!(
            "Scan {} for session {}: {}",
            ended_in,
            session_id,
            err.diagnostic()
        ));
        self.logger.debug(&format!(
            "Session {} -> {}",
            session_id,
            ScanState::Idle
        ));
        err
    }
}

#[async_trait]
impl SubmitScanUseCase for SubmitScanUseCaseImpl {
    async fn execute(&self, params: SubmitScanParams) -> Result<ScanRecord, ScanError> {
        let image = ScanImage::new(params.image_base64)?;

        let session = self.sessions.get_or_create(&params.session_id).await?;
        let scan = match session.begin_scan() {
            Ok(scan) => scan,
            Err(err) => {
                self.logger.warn(&format!(
                    "Rejected scan for session {}: another scan is in flight",
                    params.session_id
                ));
                return Err(err);
            }
        };

        self.logger.info(&format!(
            "Scanning {} image for session {}",
            params.category, params.session_id
        ));

        let raw = match self.provider.analyze(&image, params.category).await {
            Ok(raw) => raw,
            Err(err) => return Err(self.abort(scan, err)),
        };

        scan.start_parsing();
        self.logger.debug(&format!(
            "Session {} -> {} ({} bytes of provider text)",
            params.session_id,
            ScanState::Parsing,
            raw.len()
        ));

        let parsed = match parse_scan_response(&raw, params.category) {
            Ok(parsed) => parsed,
            Err(err) => return Err(self.abort(scan, err)),
        };

        let record = match scan.record(ScanRecord::new(
            params.category,
            image.to_data_uri(),
            parsed,
        )) {
            Ok(record) => record,
            Err(err) => {
                self.logger.warn(&format!(
                    "Discarded scan result: session {} ended while the scan was in flight",
                    params.session_id
                ));
                return Err(err);
            }
        };

        self.logger.info(&format!(
            "Scan {} recorded for session {}: {}",
            record.id, params.session_id, record.summary
        ));

        Ok(record)
    }
}
