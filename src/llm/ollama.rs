use crate::llm::client::LLMClient;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use ollama_rs::{
    Ollama,
    generation::chat::{ChatMessage, request::ChatMessageRequest},
};

const DEFAULT_PORT: u16 = 11434;

pub struct OllamaClient {
    client: Ollama,
    model: String,
}

/// Split `http://host:port[/path]` into (`http://host`, port), falling back to the default port.
/// Any path is dropped; ollama-rs appends its own `/api/...` routes.
fn split_base_url(base_url: &str) -> (String, u16) {
    let (scheme, rest) = base_url
        .split_once("://")
        .unwrap_or(("http", base_url));
    let authority = rest.split('/').next().unwrap_or_default();

    match authority.rsplit_once(':') {
        Some((host, port)) => (
            format!("{}://{}", scheme, host),
            port.parse().unwrap_or(DEFAULT_PORT),
        ),
        None => (format!("{}://{}", scheme, authority), DEFAULT_PORT),
    }
}

impl OllamaClient {
    pub fn new(base_url: String, model: String) -> Result<Self> {
        let (host, port) = split_base_url(&base_url);
        if host.ends_with("://") {
            return Err(AppError::Config(format!(
                "Invalid Ollama URL: '{}'",
                base_url
            )));
        }

        Ok(Self {
            client: Ollama::new(host, port),
            model,
        })
    }
}

#[async_trait]
impl LLMClient for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let messages = vec![ChatMessage::user(prompt.to_string())];
        let request = ChatMessageRequest::new(self.model.clone(), messages);

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| AppError::LLM(format!("Ollama error: {}", e)))?;

        Ok(response.message.content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
