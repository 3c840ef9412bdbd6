use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Shared Gemini HTTP client configuration.
///
/// No request timeout is set: a scan waits as long as the provider does.
pub struct GeminiClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .user_agent(concat!("scan-backend/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Name of the header carrying the API key.
    pub fn auth_header_name(&self) -> &'static str {
        "x-goog-api-key"
    }

    /// Returns the generateContent endpoint URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}
