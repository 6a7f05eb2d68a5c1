//! Gemini `generateContent` backend.
//!
//! The request asks for `application/json` output constrained by a response
//! schema matching [`Interpretation`]; the first candidate's text parts are
//! joined and parsed as that record.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::{json, Value};
use tracing::debug;

use crate::backend::InterpretationBackend;
use crate::config::{InterpreterConfig, AUTH_ENV_VAR};
use crate::error::{InterpretResult, InterpretationError};
use crate::types::{Interpretation, InterpretationRequest};

const GENERAL_SYSTEM_PROMPT: &str = "You are an expert Pythagorean Numerologist. \
Provide deep insight based on Pythagorean symbolism.";

const PINNACLE_SYSTEM_PROMPT: &str = "You are an expert Pythagorean Numerologist. For Pinnacles, remember:
- Pinnacles are \"High Spots\" of achievement, peaks, acmes, and summits.
- They show Inner Response to events, people, and conditions.
- They are highly prophetic and predictive.
- Transition periods are felt 2 years in advance.
- Master numbers (11, 22) are never reduced here.";

/// Characters of an error body kept in error messages.
const ERROR_BODY_LIMIT: usize = 320;

pub struct GeminiBackend {
    client: Client,
    url: Url,
    model: String,
}

impl std::fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiBackend {
    /// Build a backend from configuration. Requires an API key.
    pub fn new(config: &InterpreterConfig) -> InterpretResult<Self> {
        let api_key = config
            .api_key()
            .ok_or(InterpretationError::NotConfigured(AUTH_ENV_VAR))?;
        let url = resolve_endpoint(&config.endpoint, &config.model, api_key)?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| InterpretationError::InvalidConfig(e.to_string()))?;
        Ok(Self {
            client,
            url,
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl InterpretationBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn interpret(&self, request: &InterpretationRequest) -> InterpretResult<Interpretation> {
        let payload = build_payload(request);
        debug!(model = %self.model, label = %request.label, "requesting interpretation");

        let response = self
            .client
            .post(self.url.clone())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InterpretationError::Status {
                status,
                body: truncate(&body, ERROR_BODY_LIMIT),
            });
        }

        let body: Value = response.json().await?;
        parse_response(&body)
    }
}

// ── Wire format ─────────────────────────────────────────────────────────

pub fn system_prompt(request: &InterpretationRequest) -> &'static str {
    if request.is_pinnacle() {
        PINNACLE_SYSTEM_PROMPT
    } else {
        GENERAL_SYSTEM_PROMPT
    }
}

pub fn user_prompt(request: &InterpretationRequest) -> String {
    let mut prompt = format!(
        "Provide a detailed interpretation for {} of {}.",
        request.label, request.value
    );
    if let Some(context) = request.context.as_deref().filter(|c| !c.trim().is_empty()) {
        prompt.push_str(" Context: ");
        prompt.push_str(context);
    }
    prompt
}

fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "traits": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "guidance": { "type": "STRING" }
        },
        "required": ["title", "summary", "traits", "guidance"]
    })
}

pub fn build_payload(request: &InterpretationRequest) -> Value {
    json!({
        "systemInstruction": {
            "parts": [
                {
                    "text": system_prompt(request)
                }
            ]
        },
        "contents": [
            {
                "parts": [
                    {
                        "text": user_prompt(request)
                    }
                ]
            }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

/// Extract the interpretation from a `generateContent` response body.
pub fn parse_response(body: &Value) -> InterpretResult<Interpretation> {
    let text = body["candidates"]
        .as_array()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate["content"]["parts"].as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = body["candidates"][0]["finishReason"]
            .as_str()
            .unwrap_or("no candidates");
        return Err(InterpretationError::InvalidResponse(format!(
            "empty response ({reason})"
        )));
    }

    Ok(serde_json::from_str(text.trim())?)
}

/// `{base}/v1beta/models/{model}:generateContent?key=...`, unless the
/// endpoint already names the method.
pub fn resolve_endpoint(endpoint: &str, model: &str, api_key: &str) -> InterpretResult<Url> {
    let mut url = if endpoint.contains(":generateContent") {
        Url::parse(endpoint)
            .map_err(|e| InterpretationError::InvalidConfig(format!("endpoint {endpoint}: {e}")))?
    } else {
        let base = endpoint.trim_end_matches('/');
        let generated = format!("{base}/v1beta/models/{model}:generateContent");
        Url::parse(&generated)
            .map_err(|e| InterpretationError::InvalidConfig(format!("endpoint {generated}: {e}")))?
    };

    if !url.query_pairs().any(|(k, _)| k == "key") {
        url.query_pairs_mut().append_pair("key", api_key);
    }
    Ok(url)
}

fn truncate(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let truncated: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{truncated}...")
    } else {
        truncated
    }
}
