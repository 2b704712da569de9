//! LLM client abstraction and provider selection
//!
//! The agent only ever sends a single user-role prompt and reads back a single
//! completion string, so the trait is deliberately narrow:
//! - **Groq**: hosted, OpenAI-compatible chat completions (default)
//! - **OpenAI**: any OpenAI-compatible endpoint
//! - **Ollama**: local inference (requires the `ollama` feature)

use crate::types::{AppError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Default Groq endpoint (OpenAI-compatible).
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
/// Default OpenAI endpoint.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Generic LLM client trait for provider abstraction
///
/// All providers implement this trait, so the agent never depends on a
/// concrete backend and tests can substitute a scripted client.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Send `prompt` as a single user message and return the completion text
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Provider enum for runtime selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    /// Groq hosted inference
    ///
    /// # Example
    /// ```rust,ignore
    /// let provider = Provider::Groq {
    ///     api_key: std::env::var("GROQ_API_KEY")?,
    ///     api_base: GROQ_API_BASE.to_string(),
    ///     model: "llama-3.3-70b-versatile".to_string(),
    /// };
    /// ```
    Groq {
        api_key: String,
        api_base: String,
        model: String,
    },

    /// OpenAI API provider (including compatible APIs such as OpenRouter)
    OpenAI {
        api_key: String,
        api_base: String,
        model: String,
    },

    /// Ollama local LLM provider
    Ollama { base_url: String, model: String },
}

impl Provider {
    /// Create a client instance for this provider
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The provider's credential is empty
    /// - The provider was not compiled in (Ollama without the `ollama` feature)
    pub fn create_client(&self) -> Result<Arc<dyn LLMClient>> {
        match self {
            Provider::Groq {
                api_key,
                api_base,
                model,
            }
            | Provider::OpenAI {
                api_key,
                api_base,
                model,
            } => {
                if api_key.trim().is_empty() {
                    return Err(AppError::Config(format!(
                        "{} provider requires an API key",
                        self.name()
                    )));
                }
                Ok(Arc::new(super::openai::OpenAIClient::new(
                    api_key.clone(),
                    api_base.clone(),
                    model.clone(),
                )?))
            }

            #[cfg(feature = "ollama")]
            Provider::Ollama { base_url, model } => Ok(Arc::new(
                super::ollama::OllamaClient::new(base_url.clone(), model.clone())?,
            )),

            #[cfg(not(feature = "ollama"))]
            Provider::Ollama { model, .. } => Err(AppError::Config(format!(
                "Ollama support is not compiled in (requested model '{}'); \
                 rebuild with `--features ollama`",
                model
            ))),
        }
    }

    /// Get a human-readable name for this provider
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Groq { .. } => "Groq",
            Provider::OpenAI { .. } => "OpenAI",
            Provider::Ollama { .. } => "Ollama",
        }
    }

    /// Model identifier this provider will request
    pub fn model(&self) -> &str {
        match self {
            Provider::Groq { model, .. }
            | Provider::OpenAI { model, .. }
            | Provider::Ollama { model, .. } => model,
        }
    }
}
