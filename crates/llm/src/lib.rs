use anyhow::{Context, Result, anyhow};
use reqwest::Client as Http;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error};

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone, Debug)]
pub enum Provider {
    Gemini,
}

#[derive(Clone, Debug)]
pub struct Client {
    http: Http,
    provider: Provider,
    api_key: String,
    model: String,
    base_url: String, // provider-specific defaulted
}

/// Sampling parameters sent with every generation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
            response_mime_type: "text/plain".to_string(),
        }
    }
}

impl Client {
    pub fn new(provider: Provider, api_key: String, model: String) -> Result<Self> {
        let base_url = match provider {
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta".to_string(),
        };
        Ok(Self {
            http: Http::builder().pool_max_idle_per_host(8).build()?,
            provider, api_key, model, base_url,
        })
    }

    /// Convenience: pick up GEMINI_API_KEY from env for Gemini.
    pub fn from_env_gemini(model: &str) -> Result<Self> {
        let key = std::env::var(GEMINI_API_KEY_ENV).context("GEMINI_API_KEY not set")?;
        Self::new(Provider::Gemini, key, model.to_string())
    }

    /// Point the client at a different endpoint (local proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Submit an ordered list of prompt parts as one request and return the
    /// completion text verbatim.
    pub async fn generate(&self, parts: &[String], config: &GenerationConfig) -> Result<String> {
        match self.provider {
            Provider::Gemini => self.generate_gemini(parts, config).await,
        }
    }

    async fn generate_gemini(&self, parts: &[String], config: &GenerationConfig) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = gemini_request_body(parts, config);

        debug!(model = %self.model, parts = parts.len(), "sending generateContent request");

        // Key goes in a header so it never appears in a URL or an error.
        let resp = self.http.post(url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send().await
            .map_err(|e| e.without_url())
            .context("request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            error!(status = %status, "gemini request rejected");
            return Err(anyhow!("gemini {}: {}", status, gemini_error_message(&text)));
        }

        let v: Value = resp.json().await.context("invalid json")?;
        let content = gemini_candidate_text(&v)?;
        debug!(chars = content.len(), "received gemini completion");
        Ok(content)
    }

    /// Simple helper for one-shot prompts.
    pub async fn simple(&self, prompt: &str) -> Result<String> {
        self.generate(&[prompt.to_string()], &GenerationConfig::default()).await
    }
}

/// All prompt strings travel as parts of a single user turn.
fn gemini_request_body(parts: &[String], config: &GenerationConfig) -> Value {
    let parts: Vec<Value> = parts.iter().map(|p| json!({ "text": p })).collect();
    json!({
        "contents": [{ "role": "user", "parts": parts }],
        "generationConfig": {
            "temperature": config.temperature,
            "topP": config.top_p,
            "topK": config.top_k,
            "maxOutputTokens": config.max_output_tokens,
            "responseMimeType": config.response_mime_type,
        }
    })
}

fn gemini_candidate_text(v: &Value) -> Result<String> {
    let parts = v.pointer("/candidates/0/content/parts")
        .and_then(|x| x.as_array())
        .ok_or_else(|| anyhow!("missing candidates[0].content.parts"))?;
    let text: String = parts.iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();
    if text.is_empty() {
        let reason = v.pointer("/candidates/0/finishReason")
            .and_then(|x| x.as_str())
            .unwrap_or("unknown");
        return Err(anyhow!("gemini returned no text (finish reason: {})", reason));
    }
    Ok(text)
}

fn gemini_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
