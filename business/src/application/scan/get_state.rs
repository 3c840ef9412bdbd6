use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::repository::ScanSessionRepository;
use crate::domain::scan::session::ScanState;
use crate::domain::scan::use_cases::get_state::{GetScanStateParams, GetScanStateUseCase};

pub struct GetScanStateUseCaseImpl {
    pub sessions: Arc<dyn ScanSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetScanStateUseCase for GetScanStateUseCaseImpl {
    async fn execute(&self, params: GetScanStateParams) -> Result<ScanState, ScanError> {
        let state = self
            .sessions
            .find(&params.session_id)
            .await?
            .map(|session| session.state())
            .unwrap_or(ScanState::Idle);

        self.logger.debug(&format!(
            "Session {} is {}",
            params.session_id, state
        ));
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::scan::session::ScanSession;
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;

    mock! {
        pub SessionRepo {}

        #[async_trait]
        impl ScanSessionRepository for SessionRepo {
            async fn get_or_create(&self, id: &SessionId) -> Result<Arc<ScanSession>, RepositoryError>;
            async fn find(&self, id: &SessionId) -> Result<Option<Arc<ScanSession>>, RepositoryError>;
            async fn remove(&self, id: &SessionId) -> Result<bool, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_report_idle_for_unknown_session() {
        let mut repo = MockSessionRepo::new();
        repo.expect_find().returning(|_| Ok(None));
        let use_case = GetScanStateUseCaseImpl {
            sessions: Arc::new(repo),
            logger: mock_logger(),
        };

        let state = use_case
            .execute(GetScanStateParams {
                session_id: SessionId::new("new"),
            })
            .await
            .unwrap();

        assert_eq!(state, ScanState::Idle);
    }

    #[tokio::test]
    async fn should_report_awaiting_provider_while_scan_in_flight() {
        let session = Arc::new(ScanSession::new(SessionId::new("busy")));
        let _in_flight = session.begin_scan().unwrap();

        let mut repo = MockSessionRepo::new();
        let found = Arc::clone(&session);
        repo.expect_find()
            .returning(move |_| Ok(Some(Arc::clone(&found))));
        let use_case = GetScanStateUseCaseImpl {
            sessions: Arc::new(repo),
            logger: mock_logger(),
        };

        let state = use_case
            .execute(GetScanStateParams {
                session_id: SessionId::new("busy"),
            })
            .await
            .unwrap();

        assert_eq!(state, ScanState::AwaitingProvider);
    }
}
