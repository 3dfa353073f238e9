//! OpenAI-compatible chat completion provider

use super::super::generator::{CodeGenRequest, CodeGenerator, GeneratedCode};
use super::super::prompt::{CODEGEN_SYSTEM_PROMPT, codegen_prompt, extract_code_block};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub struct OpenAIProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAIProvider {
    /// Falls back to `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `OPENAI_MODEL`
    /// for anything not passed explicitly.
    pub fn new(api_key: Option<String>, model: Option<String>) -> Self {
        let api_key = api_key
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .unwrap_or_default();
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = model
            .or_else(|| std::env::var("OPENAI_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }
}

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    total_tokens: u32,
}

#[async_trait::async_trait]
impl CodeGenerator for OpenAIProvider {
    async fn generate(&self, request: &CodeGenRequest) -> Result<GeneratedCode> {
        if self.api_key.is_empty() {
            anyhow::bail!("OpenAI API key not configured (set OPENAI_API_KEY)");
        }

        let openai_request = OpenAIRequest {
            model: self.model.clone(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: CODEGEN_SYSTEM_PROMPT.to_string(),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: codegen_prompt(&request.pseudocode, &request.language),
                },
            ],
            temperature: 0.1,
            max_tokens: 2000,
        };

        tracing::debug!(
            "Requesting {} code from {} ({} pseudocode lines)",
            request.language,
            self.model,
            request.pseudocode.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&openai_request)
            .send()
            .await
            .context("Failed to send request to OpenAI")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenAI API error ({}): {}", status, error_text);
        }

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI response JSON")?;
        let content = openai_response
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .context("OpenAI response contained no choices")?;

        Ok(GeneratedCode {
            code: extract_code_block(content),
            provider: self.name().to_string(),
            tokens_used: openai_response.usage.map_or(0, |u| u.total_tokens),
        })
    }

    fn name(&self) -> &str {
        "OpenAI"
    }
}
