//! LLM Provider Clients
//!
//! The agent talks to a language model through the [`LLMClient`] trait. A
//! concrete client is built once at startup from a [`Provider`] and shared
//! behind an `Arc` for the lifetime of the process.
//!
//! # Supported Providers
//!
//! - `Groq` / `OpenAI` - OpenAI-compatible chat completions over HTTP
//! - `Ollama` - local Ollama server (`ollama` feature)
//!
//! # Example
//!
//! ```ignore
//! use tool_router::llm::{Provider, GROQ_API_BASE};
//!
//! let client = Provider::Groq {
//!     api_key,
//!     api_base: GROQ_API_BASE.to_string(),
//!     model: "llama-3.3-70b-versatile".to_string(),
//! }
//! .create_client()?;
//!
//! let reply = client.generate("What is 2+2?").await?;
//! ```

/// Core LLM client trait and provider selection.
pub mod client;
/// OpenAI-compatible HTTP client (Groq, OpenAI).
pub mod openai;

#[cfg(feature = "ollama")]
pub mod ollama;

pub use client::{DEFAULT_MODEL, GROQ_API_BASE, LLMClient, OPENAI_API_BASE, Provider};
