use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::scan::use_cases::get_by_id::{GetScanByIdParams, GetScanByIdUseCase};
use business::domain::scan::use_cases::get_history::{
    GetScanHistoryParams, GetScanHistoryUseCase,
};
use business::domain::scan::use_cases::submit::{SubmitScanParams, SubmitScanUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::scan::dto::{ScanRecordResponse, SubmitScanRequest};
use crate::api::security::SessionHeader;
use crate::api::tags::ApiTags;

pub struct ScanApi {
    submit_use_case: Arc<dyn SubmitScanUseCase>,
    get_history_use_case: Arc<dyn GetScanHistoryUseCase>,
    get_by_id_use_case: Arc<dyn GetScanByIdUseCase>,
}

impl ScanApi {
    pub fn new(
        submit_use_case: Arc<dyn SubmitScanUseCase>,
        get_history_use_case: Arc<dyn GetScanHistoryUseCase>,
        get_by_id_use_case: Arc<dyn GetScanByIdUseCase>,
    ) -> Self {
        Self {
            submit_use_case,
            get_history_use_case,
            get_by_id_use_case,
        }
    }
}

/// Image scanning API
///
/// Submit images for analysis and browse the session's scan history.
#[OpenApi]
impl ScanApi {
    /// Submit a scan
    ///
    /// Sends the image to the analysis provider with the selected scanner's
    /// instructions and records the result at the top of the session history.
    #[oai(path = "/scans", method = "post", tag = "ApiTags::Scans")]
    async fn submit_scan(
        &self,
        session: SessionHeader,
        body: Json<SubmitScanRequest>,
    ) -> SubmitScanResponse {
        let params = SubmitScanParams {
            session_id: session.0,
            image_base64: body.0.image_base64,
            category: body.0.category.into(),
        };

        match self.submit_use_case.execute(params).await {
            Ok(record) => SubmitScanResponse::Created(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitScanResponse::BadRequest(json),
                    409 => SubmitScanResponse::Conflict(json),
                    422 => SubmitScanResponse::UnprocessableEntity(json),
                    503 => SubmitScanResponse::ServiceUnavailable(json),
                    _ => SubmitScanResponse::InternalError(json),
                }
            }
        }
    }

    /// List scan history
    ///
    /// Returns the session's records, most recent first.
    #[oai(path = "/scans", method = "get", tag = "ApiTags::Scans")]
    async fn get_history(&self, session: SessionHeader) -> GetScanHistoryResponse {
        let params = GetScanHistoryParams {
            session_id: session.0,
        };

        match self.get_history_use_case.execute(params).await {
            Ok(records) => {
                let responses: Vec<ScanRecordResponse> =
                    records.into_iter().map(|r| r.into()).collect();
                GetScanHistoryResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetScanHistoryResponse::InternalError(json)
            }
        }
    }

    /// Get a scan by ID
    ///
    /// Returns one record from the session's history.
    #[oai(path = "/scans/:id", method = "get", tag = "ApiTags::Scans")]
    async fn get_scan_by_id(&self, session: SessionHeader, id: Path<String>) -> GetScanByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetScanByIdResponse::BadRequest(ErrorResponse::validation(
                    "scan.invalid_id",
                ));
            }
        };

        let params = GetScanByIdParams {
            id: uuid,
            session_id: session.0,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(record) => GetScanByIdResponse::Ok(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetScanByIdResponse::NotFound(json),
                    _ => GetScanByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitScanResponse {
    #[oai(status = 201)]
    Created(Json<ScanRecordResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetScanHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ScanRecordResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetScanByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ScanRecordResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
