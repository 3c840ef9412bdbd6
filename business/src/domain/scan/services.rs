use async_trait::async_trait;

use super::category::ScanCategory;
use super::errors::ScanError;
use super::image::ScanImage;

/// Service port for the external multimodal analysis model.
///
/// One call, one attempt. Implementations return the model's raw text and
/// substitute `"{}"` when the model answers with nothing.
#[async_trait]
pub trait AnalysisProviderService: Send + Sync {
    async fn analyze(&self, image: &ScanImage, category: ScanCategory)
    -> Result<String, ScanError>;
}
