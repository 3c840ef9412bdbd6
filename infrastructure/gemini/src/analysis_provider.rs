use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::scan::category::ScanCategory;
use business::domain::scan::errors::ScanError;
use business::domain::scan::image::ScanImage;
use business::domain::scan::services::AnalysisProviderService;

use crate::client::GeminiClient;

const RAW_JSON_DIRECTIVE: &str =
    "Analise esta imagem. Retorne APENAS JSON bruto sem formatação markdown.";

const FOOD_PROMPT: &str = "Você é um nutricionista especialista. Analise a imagem da comida/prato. Forneça uma resposta JSON com: nome_prato, calorias_estimadas, macronutrientes (proteina, carboidratos, gordura em gramas) e uma curta analise_saude (2 frases).";

const VEHICLE_PROMPT: &str = "Você é um mecânico automotivo especialista e perito em seguros. Analise a imagem do dano no veículo. Forneça uma resposta JSON com: dano_detectado, pecas_afetadas (array), nivel_urgencia (Baixo/Médio/Alto), estimativa_custo_reparo_brl, e acoes_recomendadas.";

const DOCUMENT_PROMPT: &str = "Você é um analista legal e de negócios especialista. Analise a imagem do documento/planilha. Forneça uma resposta JSON com: tipo_documento, resumo_proposito, entidades_chave_envolvidas, datas_criticas_ou_obrigacoes, e uma analise_sentimento (Neutro/Positivo/Risco).";

const OBJECT_PROMPT: &str = "Você é um avaliador especialista e buscador de produtos. Analise a imagem do objeto. Forneça uma resposta JSON com: nome_produto, palpite_fabricante, palpite_modelo, estimativa_valor_mercado_brl, e 3_varejistas_potenciais.";

const TEMPERATURE: f64 = 0.4;
const EMPTY_RESPONSE: &str = "{}";
// Cap on the error body copied into diagnostics.
const MAX_ERROR_BODY: usize = 512;

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

pub struct AnalysisProviderGemini {
    client: GeminiClient,
}

impl AnalysisProviderGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn instruction_for(category: ScanCategory) -> &'static str {
        match category {
            ScanCategory::Food => FOOD_PROMPT,
            ScanCategory::Vehicle => VEHICLE_PROMPT,
            ScanCategory::Document => DOCUMENT_PROMPT,
            ScanCategory::Object => OBJECT_PROMPT,
        }
    }

    fn prompt_for(category: ScanCategory) -> String {
        format!("{} {}", RAW_JSON_DIRECTIVE, Self::instruction_for(category))
    }

    fn request_body(image: &ScanImage, category: ScanCategory) -> serde_json::Value {
        json!({
            "contents": [
                {
                    "parts": [
                        {
                            "inline_data": {
                                "mime_type": image.mime_type(),
                                "data": image.payload(),
                            }
                        },
                        { "text": Self::prompt_for(category) },
                    ]
                }
            ],
            "generationConfig": { "temperature": TEMPERATURE },
        })
    }

    /// Joins the text parts of the first candidate; an empty answer becomes `{}`.
    fn response_text(response: GenerateContentResponse) -> String {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            EMPTY_RESPONSE.to_string()
        } else {
            text
        }
    }
}

#[async_trait]
impl AnalysisProviderService for AnalysisProviderGemini {
    async fn analyze(
        &self,
        image: &ScanImage,
        category: ScanCategory,
    ) -> Result<String, ScanError> {
        let body = Self::request_body(image, category);

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header(self.client.auth_header_name(), &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ScanError::provider(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let detail: String = detail.chars().take(MAX_ERROR_BODY).collect();
            return Err(ScanError::provider(format!("HTTP {status}: {detail}")));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ScanError::provider(format!("unreadable response: {e}")))?;

        Ok(Self::response_text(data))
    }
}
