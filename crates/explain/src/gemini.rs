//! Explanations from the Google Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};

use quadra_core::Coefficients;

use crate::{ExplainConfig, ExplainError, Explainer, SYSTEM_INSTRUCTION, prompt};

/// An [`Explainer`] backed by Google Gemini.
///
/// Requests are blocking; run them off the UI thread.
#[derive(Debug, Clone)]
pub struct GeminiExplainer {
    config: ExplainConfig,
}

impl GeminiExplainer {
    /// Creates an explainer from a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid.
    pub fn new(config: ExplainConfig) -> Result<Self, ExplainError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the config in use.
    #[must_use]
    pub fn config(&self) -> &ExplainConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl Explainer for GeminiExplainer {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn explain(&self, coeffs: &Coefficients) -> Result<String, ExplainError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ExplainError::MissingApiKey)?;

        let user_prompt = prompt(coeffs);
        let request = GenerateRequest::new(SYSTEM_INSTRUCTION, &user_prompt);

        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.timeout_duration())
            .build()
            .map_err(transport)?;

        tracing::debug!(model = %self.config.model, prompt = %user_prompt, "sending gemini request");

        let response = client
            .post(self.endpoint())
            .header("x-goog-api-key", key)
            .json(&request)
            .send()
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().map_err(transport)?;
        if !status.is_success() {
            return Err(ExplainError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }
}

fn transport(err: reqwest::Error) -> ExplainError {
    ExplainError::Transport(Box::new(err))
}

/// Extracts the concatenated text of the first candidate.
///
/// A response without candidates or text parts yields an empty string.
fn parse_response(body: &str) -> Result<String, ExplainError> {
    let response: GenerateResponse = serde_json::from_str(body).map_err(ExplainError::Decode)?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(text)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

impl<'a> GenerateRequest<'a> {
    fn new(system: &'a str, user: &'a str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: system }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: user }],
            }],
        }
    }
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    text: Option<String>,
}
