use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::scan::category::ScanCategory;
use business::domain::scan::model::ScanRecord;
use business::domain::scan::session::ScanState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum ScanCategoryDto {
    #[oai(rename = "FOOD")]
    Food,
    #[oai(rename = "VEHICLE")]
    Vehicle,
    #[oai(rename = "DOCUMENT")]
    Document,
    #[oai(rename = "OBJECT")]
    Object,
}

impl From<ScanCategory> for ScanCategoryDto {
    fn from(category: ScanCategory) -> Self {
        match category {
            ScanCategory::Food => ScanCategoryDto::Food,
            ScanCategory::Vehicle => ScanCategoryDto::Vehicle,
            ScanCategory::Document => ScanCategoryDto::Document,
            ScanCategory::Object => ScanCategoryDto::Object,
        }
    }
}

impl From<ScanCategoryDto> for ScanCategory {
    fn from(dto: ScanCategoryDto) -> Self {
        match dto {
            ScanCategoryDto::Food => ScanCategory::Food,
            ScanCategoryDto::Vehicle => ScanCategory::Vehicle,
            ScanCategoryDto::Document => ScanCategory::Document,
            ScanCategoryDto::Object => ScanCategory::Object,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum ScanStateDto {
    #[oai(rename = "idle")]
    Idle,
    #[oai(rename = "awaiting_provider")]
    AwaitingProvider,
    #[oai(rename = "parsing")]
    Parsing,
    #[oai(rename = "recorded")]
    Recorded,
    #[oai(rename = "failed")]
    Failed,
}

impl From<ScanState> for ScanStateDto {
    fn from(state: ScanState) -> Self {
        match state {
            ScanState::Idle => ScanStateDto::Idle,
            ScanState::AwaitingProvider => ScanStateDto::AwaitingProvider,
            ScanState::Parsing => ScanStateDto::Parsing,
            ScanState::Recorded => ScanStateDto::Recorded,
            ScanState::Failed => ScanStateDto::Failed,
        }
    }
}

/// Request to analyze one image.
#[derive(Debug, Clone, Object)]
pub struct SubmitScanRequest {
    /// Base64-encoded image data, optionally as a `data:` URI
    pub image_base64: String,
    /// Scanner to run
    pub category: ScanCategoryDto,
}

#[derive(Debug, Clone, Object)]
pub struct ScanRecordResponse {
    /// Record unique identifier
    pub id: String,
    /// When the scan completed
    pub created_at: DateTime<Utc>,
    /// Scanner that produced the record
    pub category: ScanCategoryDto,
    /// The analyzed image as a data URI
    pub image: String,
    /// Short headline for history lists
    pub summary: String,
    /// Every field returned by the provider, in response order
    pub details: serde_json::Value,
}

impl From<ScanRecord> for ScanRecordResponse {
    fn from(record: ScanRecord) -> Self {
        Self {
            id: record.id.to_string(),
            created_at: record.created_at,
            category: record.category.into(),
            image: record.image,
            summary: record.summary,
            details: record.details.to_json(),
        }
    }
}
