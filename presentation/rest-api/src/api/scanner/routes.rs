use poem_openapi::{Object, OpenApi, payload::Json};

use business::domain::scan::catalog::{ScannerInfo, scanners};

use crate::api::scan::dto::ScanCategoryDto;
use crate::api::tags::ApiTags;

/// A scanner a client can pick before submitting an image.
#[derive(Debug, Clone, Object)]
pub struct ScannerResponse {
    pub category: ScanCategoryDto,
    pub title: String,
    pub description: String,
}

impl From<ScannerInfo> for ScannerResponse {
    fn from(info: ScannerInfo) -> Self {
        Self {
            category: info.category.into(),
            title: info.title.to_string(),
            description: info.description.to_string(),
        }
    }
}

pub struct ScannerApi;

#[OpenApi]
impl ScannerApi {
    /// List scanners
    ///
    /// Returns the available scanners, one per category.
    #[oai(path = "/scanners", method = "get", tag = "ApiTags::Scanners")]
    async fn list_scanners(&self) -> Json<Vec<ScannerResponse>> {
        Json(scanners().into_iter().map(|s| s.into()).collect())
    }
}
