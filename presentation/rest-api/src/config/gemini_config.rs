use anyhow::{Context, bail};

use gemini::client::GeminiClient;

/// Configuration for Gemini API access.
///
/// Environment variables:
/// - GEMINI_API_KEY: API key authorizing provider calls (required)
/// - GEMINI_MODEL: model name (optional)
/// - GEMINI_BASE_URL: API root, e.g. a local proxy (optional)
pub struct GeminiConfig {
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl GeminiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY environment variable must be set")?;
        if api_key.trim().is_empty() {
            bail!("GEMINI_API_KEY is empty");
        }

        Ok(Self {
            api_key,
            model: non_empty_var("GEMINI_MODEL"),
            base_url: non_empty_var("GEMINI_BASE_URL"),
        })
    }

    pub fn into_client(self) -> GeminiClient {
        let mut client = GeminiClient::new(self.api_key);
        if let Some(model) = self.model {
            client = client.with_model(model);
        }
        if let Some(base_url) = self.base_url {
            client = client.with_base_url(base_url);
        }
        client
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
