use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

// --- Shared Logging ---

/// Initialize structured logging with JSON format in production (when RUST_LOG is set),
/// or pretty format for local development.
pub fn init_logging() {
    let is_production = std::env::var("RUST_LOG").is_ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if is_production {
        let _ = fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    }
}

// --- Chat Completion Structs ---

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    pub content: String,
}

#[derive(Serialize, Debug)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    pub choices: Option<Vec<ChatChoice>>,
    pub error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
pub struct ApiError {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion API error: {0}")]
    Api(String),

    #[error("completion response carried no message content")]
    MissingContent,
}

/// Request a single chat completion and return the first choice's message text.
#[instrument(skip(client, api_key, prompt), fields(prompt_len = prompt.len()))]
pub async fn call_chat_completion(
    client: &reqwest::Client,
    base_url: &Url,
    api_key: &str,
    model: &str,
    prompt: String,
) -> Result<String, CompletionError> {
    let url = format!("{}/chat/completions", base_url.as_str().trim_end_matches('/'));

    let request = ChatRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: prompt,
        }],
    };

    debug!("Sending chat completion request");

    let res = client.post(&url)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await?;

    let status = res.status();
    debug!(status = %status, "Chat completion response received");

    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(CompletionError::Status { status, body });
    }

    let resp: ChatResponse = res.json().await?;

    if let Some(error) = resp.error {
        return Err(CompletionError::Api(error.message));
    }

    if let Some(choices) = resp.choices {
        if let Some(first) = choices.first() {
            return Ok(first.message.content.clone());
        }
    }

    Err(CompletionError::MissingContent)
}
