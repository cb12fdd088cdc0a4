/// Scoring client — the single point of entry for all model calls.
///
/// ARCHITECTURAL RULE: No other module may call the generation API directly.
/// All model interactions MUST go through this module.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all scoring calls.
pub const MODEL: &str = "gemini-2.5-flash";

/// Canonical degenerate reply substituted for a failed scoring call.
/// Parses to score 0 with empty strength and gap sections, so one dead call
/// never aborts a batch.
pub const EMPTY_REPLY: &str = "SCORE: 0%\nSTRENGTHS:\nMISSING:";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no candidate text")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The model seam. Scoring goes through this trait so tests (and any future
/// backend swap) can stand in for the remote service.
#[async_trait]
pub trait ScoreModel: Send + Sync {
    /// Sends one prompt and returns the model's raw text reply.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Gemini-backed scorer over the generateContent REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    /// Builds a client for the given API key. No request timeout is set;
    /// timeout policy belongs to the embedding surface.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ScoreModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!("{API_BASE_URL}/{MODEL}:generateContent");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the body carries one
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generate_response: GenerateResponse = response.json().await?;
        let text = generate_response.text().ok_or(LlmError::EmptyContent)?;

        debug!("scoring call succeeded: {} reply chars", text.len());

        Ok(text)
    }
}

/// Outcome of one scoring call.
///
/// `Fallback` carries the fault that triggered the canonical empty reply, so
/// callers can tell "the model said 0%" from "the call died".
#[derive(Debug)]
pub enum ScoreReply {
    Answered(String),
    Fallback(LlmError),
}

impl ScoreReply {
    /// Raw reply text to hand to the parser. Always well-formed degenerate
    /// input in the fallback case.
    pub fn text(&self) -> &str {
        match self {
            ScoreReply::Answered(text) => text,
            ScoreReply::Fallback(_) => EMPTY_REPLY,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ScoreReply::Fallback(_))
    }
}

/// Scores one resume against the job description.
///
/// Builds the bounded prompt and calls the model. Any failure of the
/// underlying call is absorbed here — the caller always gets parseable text.
pub async fn score_resume(
    model: &dyn ScoreModel,
    job_desc: &str,
    resume_text: &str,
) -> ScoreReply {
    let prompt = prompts::build_scoring_prompt(job_desc, resume_text);

    match model.generate(&prompt).await {
        Ok(text) => ScoreReply::Answered(text),
        Err(err) => {
            warn!("scoring call failed, substituting empty reply: {err}");
            ScoreReply::Fallback(err)
        }
    }
}
