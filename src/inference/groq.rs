// src/inference/groq.rs
//! Streams chat completions from the Groq OpenAI-compatible endpoint.

use super::{ChatMessage, ChatRequest, ChunkStream, InferenceProvider};
use crate::constants::API_KEY_ENV_VAR;
use crate::errors::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use std::io::BufReader;
use std::time::Duration;

/// Default API root; `/chat/completions` is appended.
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}

/// A blocking client for the Groq chat-completion API.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqClient {
    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    /// Returns `Error::Config` for an empty key and `Error::Inference` if the
    /// HTTP client cannot be built.
    pub fn new<K: Into<String>>(api_key: K) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Config(format!(
                "API key is empty. Set {} or pass --api-key.",
                API_KEY_ENV_VAR
            )));
        }
        Ok(Self {
            client: build_reqwest_client()?,
            api_key,
            base_url: GROQ_BASE_URL.to_string(),
        })
    }

    /// Creates a client from `GROQ_API_KEY`, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        match std::env::var(API_KEY_ENV_VAR) {
            Ok(key) => Self::new(key),
            Err(_) => Err(Error::Config(format!(
                "{} is not set. Add it to your environment or a .env file.",
                API_KEY_ENV_VAR
            ))),
        }
    }

    /// Points the client at another OpenAI-compatible API root.
    pub fn with_base_url<U: Into<String>>(mut self, base_url: U) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl InferenceProvider for GroqClient {
    fn stream(&self, request: &ChatRequest) -> Result<ChunkStream> {
        let body = CompletionBody {
            model: &request.model,
            messages: request.messages(),
            stream: true,
        };
        let url = self.completions_url();
        log::debug!("Requesting completion from {} with model {}", url, request.model);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "text/event-stream")
            .json(&body)
            .send()
            .map_err(|e| Error::Inference(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(Error::Inference(format!("{}: {}", status, text.trim())));
        }
        Ok(ChunkStream::from_reader(BufReader::new(response)))
    }
}

fn build_reqwest_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("aidigest/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(CONNECT_TIMEOUT)
        // Answers stream for as long as the model generates.
        .timeout(None::<Duration>)
        .build()
        .map_err(|e| Error::Inference(format!("failed to build HTTP client: {}", e)))
}
