use std::sync::Arc;

use logger::TracingLogger;
use persistence::scan_session::repository::ScanSessionRepositoryInMemory;

use gemini::analysis_provider::AnalysisProviderGemini;

use business::application::scan::end_session::EndSessionUseCaseImpl;
use business::application::scan::get_by_id::GetScanByIdUseCaseImpl;
use business::application::scan::get_history::GetScanHistoryUseCaseImpl;
use business::application::scan::get_state::GetScanStateUseCaseImpl;
use business::application::scan::submit::SubmitScanUseCaseImpl;
use business::domain::scan::repository::ScanSessionRepository;
use business::domain::scan::services::AnalysisProviderService;

use crate::api::health::routes::HealthApi;
use crate::api::scan::routes::ScanApi;
use crate::api::scanner::routes::ScannerApi;
use crate::api::session::routes::SessionApi;
use crate::config::gemini_config::GeminiConfig;
use crate::config::session_config::SessionConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub scanner_api: ScannerApi,
    pub scan_api: ScanApi,
    pub session_api: SessionApi,
}

impl DependencyContainer {
    pub fn new(gemini_config: GeminiConfig, session_config: &SessionConfig) -> Self {
        // Infrastructure adapters
        let provider = Arc::new(AnalysisProviderGemini::new(gemini_config.into_client()));
        let sessions = Arc::new(ScanSessionRepositoryInMemory::with_capacity(
            session_config.capacity,
        ));

        Self::with_adapters(provider, sessions)
    }

    pub fn with_adapters(
        provider: Arc<dyn AnalysisProviderService>,
        sessions: Arc<dyn ScanSessionRepository>,
    ) -> Self {
        let logger = Arc::new(TracingLogger::new("scan"));

        // Scan use cases
        let submit_use_case = Arc::new(SubmitScanUseCaseImpl {
            provider,
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let get_history_use_case = Arc::new(GetScanHistoryUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetScanByIdUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });

        // Session use cases
        let get_state_use_case = Arc::new(GetScanStateUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let end_session_use_case = Arc::new(EndSessionUseCaseImpl { sessions, logger });

        Self {
            health_api: HealthApi,
            scanner_api: ScannerApi,
            scan_api: ScanApi::new(submit_use_case, get_history_use_case, get_by_id_use_case),
            session_api: SessionApi::new(get_state_use_case, end_session_use_case),
        }
    }
}
