use crate::llm::{DEFAULT_MODEL, GROQ_API_BASE, OPENAI_API_BASE, Provider};
use crate::types::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LLMConfig {
    /// One of `groq`, `openai`, `ollama`
    pub provider: String,
    pub model: String,
    /// Overrides the provider's default endpoint
    pub api_base: Option<String>,
    pub groq_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub ollama_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Config {
    /// Load configuration from the environment, honouring a `.env` file if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a port number, got '{}'", raw)))?,
            None => 3000,
        };

        let format = match var("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                    other
                )));
            }
        };

        Ok(Config {
            server: ServerConfig {
                host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port,
            },
            llm: LLMConfig {
                provider: var("LLM_PROVIDER").unwrap_or_else(|| "groq".to_string()),
                model: var("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: var("LLM_API_BASE"),
                groq_api_key: var("GROQ_API_KEY"),
                openai_api_key: var("OPENAI_API_KEY"),
                ollama_url: var("OLLAMA_URL")
                    .unwrap_or_else(|| "http://localhost:11434".to_string()),
            },
            logging: LoggingConfig {
                filter: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
                format,
            },
        })
    }
}

impl LLMConfig {
    /// Resolve the configured provider, checking that its credential is present.
    pub fn provider(&self) -> Result<Provider> {
        let missing_key = |var: &str| {
            AppError::Config(format!(
                "{} is not set; export it or add it to .env",
                var
            ))
        };

        match self.provider.to_ascii_lowercase().as_str() {
            "groq" => Ok(Provider::Groq {
                api_key: self
                    .groq_api_key
                    .clone()
                    .ok_or_else(|| missing_key("GROQ_API_KEY"))?,
                api_base: self
                    .api_base
                    .clone()
                    .unwrap_or_else(|| GROQ_API_BASE.to_string()),
                model: self.model.clone(),
            }),
            "openai" => Ok(Provider::OpenAI {
                api_key: self
                    .openai_api_key
                    .clone()
                    .ok_or_else(|| missing_key("OPENAI_API_KEY"))?,
                api_base: self
                    .api_base
                    .clone()
                    .unwrap_or_else(|| OPENAI_API_BASE.to_string()),
                model: self.model.clone(),
            }),
            "ollama" => Ok(Provider::Ollama {
                base_url: self
                    .api_base
                    .clone()
                    .unwrap_or_else(|| self.ollama_url.clone()),
                model: self.model.clone(),
            }),
            other => Err(AppError::Config(format!(
                "Unknown LLM provider '{}' (expected groq, openai or ollama)",
                other
            ))),
        }
    }
}
