//! # tool-router
//!
//! A single-turn "manual tool routing" agent. The agent asks a hosted LLM
//! whether a tool is needed for a goal, parses the fixed two-line reply
//!
//! ```text
//! TOOL: calculator
//! INPUT: 12*8
//! ```
//!
//! runs the named tool, and asks the LLM once more for the final answer.
//! A reply without `TOOL:` is returned as the answer directly.
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tool_router::{Provider, ToolAgent, ToolRegistry, llm::GROQ_API_BASE};
//!
//! let llm = Provider::Groq {
//!     api_key: std::env::var("GROQ_API_KEY")?,
//!     api_base: GROQ_API_BASE.to_string(),
//!     model: "llama-3.3-70b-versatile".to_string(),
//! }
//! .create_client()?;
//!
//! let agent = ToolAgent::new(llm, Arc::new(ToolRegistry::with_default_tools()));
//! let answer = agent.run("What is 12 * 8?").await?;
//! ```
//!
//! ## Modules
//!
//! - [`agents`] - The tool-routing agent
//! - [`api`] - HTTP front end (single-page form + JSON API)
//! - [`cli`] - Command-line parsing and terminal output
//! - [`llm`] - LLM client trait and providers
//! - [`tools`] - Tool trait, registry, calculator and web search
//! - [`types`] - Shared types and error handling
//! - [`utils`] - Configuration and logging

#![warn(rustdoc::missing_crate_level_docs)]

/// Tool-routing agent.
pub mod agents;
/// HTTP handlers and routes.
pub mod api;
/// Command-line interface.
pub mod cli;
/// LLM provider clients and abstractions.
pub mod llm;
/// Built-in tools (calculator, web search).
pub mod tools;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration and logging utilities.
pub mod utils;

pub use agents::ToolAgent;
pub use llm::{LLMClient, Provider};
pub use tools::{Tool, ToolRegistry};
pub use types::{AppError, Result};
pub use utils::config::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The agent, built once at startup and shared by every request
    pub agent: Arc<ToolAgent>,
    /// Human-readable provider name for status reporting
    pub provider_name: &'static str,
}

impl AppState {
    pub fn new(agent: Arc<ToolAgent>, provider_name: &'static str) -> Self {
        Self {
            agent,
            provider_name,
        }
    }
}
