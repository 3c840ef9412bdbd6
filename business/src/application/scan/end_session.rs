use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::repository::ScanSessionRepository;
use crate::domain::scan::use_cases::end_session::{EndSessionParams, EndSessionUseCase};

pub struct EndSessionUseCaseImpl {
    pub sessions: Arc<dyn ScanSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl EndSessionUseCase for EndSessionUseCaseImpl {
    async fn execute(&self, params: EndSessionParams) -> Result<(), ScanError> {
        let removed = self.sessions.remove(&params.session_id).await?;

        if removed {
            self.logger.info(&format!(
                "Session {} ended, history discarded",
                params.session_id
            ));
        } else {
            self.logger.debug(&format!(
                "Session {} was not active",
                params.session_id
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::scan::session::ScanSession;
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;
    use mockall::predicate::eq;

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
    async fn should_remove_session_from_repository() {
        let mut repo = MockSessionRepo::new();
        repo.expect_remove()
            .with(eq(SessionId::new("bye")))
            .times(1)
            .returning(|_| Ok(true));
        let use_case = EndSessionUseCaseImpl {
            sessions: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(EndSessionParams {
                session_id: SessionId::new("bye"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_when_session_was_never_started() {
        let mut repo = MockSessionRepo::new();
        repo.expect_remove().returning(|_| Ok(false));
        let use_case = EndSessionUseCaseImpl {
            sessions: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(EndSessionParams {
                session_id: SessionId::new("ghost"),
            })
            .await;

        assert!(result.is_ok());
    }
}
