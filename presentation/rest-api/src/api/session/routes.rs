use std::sync::Arc;

use poem_openapi::{Object, OpenApi, payload::Json};

use business::domain::scan::use_cases::end_session::{EndSessionParams, EndSessionUseCase};
use business::domain::scan::use_cases::get_state::{GetScanStateParams, GetScanStateUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::scan::dto::ScanStateDto;
use crate::api::security::SessionHeader;
use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct ScanStateResponse {
    /// Current position in the scan lifecycle
    pub state: ScanStateDto,
}

pub struct SessionApi {
    get_state_use_case: Arc<dyn GetScanStateUseCase>,
    end_session_use_case: Arc<dyn EndSessionUseCase>,
}

impl SessionApi {
    pub fn new(
        get_state_use_case: Arc<dyn GetScanStateUseCase>,
        end_session_use_case: Arc<dyn EndSessionUseCase>,
    ) -> Self {
        Self {
            get_state_use_case,
            end_session_use_case,
        }
    }
}

/// Session API
///
/// Inspect or discard the state kept for one client session.
#[OpenApi]
impl SessionApi {
    /// Get scan state
    ///
    /// Sessions that never submitted a scan report "idle".
    #[oai(path = "/session/state", method = "get", tag = "ApiTags::Session")]
    async fn get_state(&self, session: SessionHeader) -> GetScanStateResponse {
        let params = GetScanStateParams {
            session_id: session.0,
        };

        match self.get_state_use_case.execute(params).await {
            Ok(state) => GetScanStateResponse::Ok(Json(ScanStateResponse {
                state: state.into(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetScanStateResponse::InternalError(json)
            }
        }
    }

    /// End the session
    ///
    /// Discards the session's history. Unknown sessions are accepted.
    #[oai(path = "/session", method = "delete", tag = "ApiTags::Session")]
    async fn end_session(&self, session: SessionHeader) -> EndSessionResponse {
        let params = EndSessionParams {
            session_id: session.0,
        };

        match self.end_session_use_case.execute(params).await {
            Ok(()) => EndSessionResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                EndSessionResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetScanStateResponse {
    #[oai(status = 200)]
    Ok(Json<ScanStateResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum EndSessionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
