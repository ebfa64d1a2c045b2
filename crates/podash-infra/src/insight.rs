//! Gemini insight client
//!
//! Sends a textual digest of the parsed model to the Gemini
//! `generateContent` endpoint and returns the free-text insight body.
//! The response text is not structured beyond being newline-separated
//! bullet sentences; splitting for display is the caller's concern.

use podash_types::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Deserialize)]
struct GeminiCandidatePart {
    text: String,
}

/// Client for the insight endpoint.
pub struct InsightClient {
    client: reqwest::Client,
    model: String,
    api_key: String,
}

impl InsightClient {
    pub fn new(client: reqwest::Client, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Ask for management insights over a model digest.
    pub async fn generate_insights(&self, digest: &str) -> Result<String> {
        let prompt = format!(
            "Analyze this production data and provide 3-4 actionable \
             bullet-point insights for management. Focus on rework issues, \
             inventory levels, and production bottlenecks. Keep it \
             professional and concise.\n\n{}",
            digest
        );
        self.generate(&prompt).await
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            BASE_URL, self.model, self.api_key
        );

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let resp = self.client.post(&url).json(&request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            debug!(%status, %body, "insight request failed");
            return Err(Error::Insight(format!(
                "Gemini API error ({}): {}",
                status, body
            )));
        }

        let parsed: GeminiResponse = resp.json().await?;
        extract_text(parsed)
    }
}

fn extract_text(resp: GeminiResponse) -> Result<String> {
    resp.candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::Insight("empty response from model".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_from_response() {
        let resp: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"- Watch rework on P-100\n- Inventory is healthy"}]}}]}"#,
        )
        .unwrap();

        let text = extract_text(resp).unwrap();
        assert!(text.starts_with("- Watch rework"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_empty_candidates_is_error() {
        let resp: GeminiResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(extract_text(resp).is_err());
    }
}
