//! Built-in Tools
//!
//! Tools take a single text input and return a single text result. The agent
//! looks them up by exact name in a [`ToolRegistry`].
//!
//! # Available Tools
//!
//! ## Calculator
//! ```ignore
//! let result = calculator::evaluate("12*8")?;  // "96"
//! ```
//!
//! ## Web Search
//! ```ignore
//! let text = SearchTool::new().execute("rust programming").await?;
//! ```
//!
//! # Tool Registry
//!
//! ```ignore
//! let mut registry = ToolRegistry::with_default_tools();
//! registry.register(Arc::new(MyTool));
//! let result = registry.route("calculator", "2+2").await?;  // "4"
//! let missing = registry.route("weather", "Paris").await?;  // "Unknown tool"
//! ```

/// Calculator tool for arithmetic expressions.
pub mod calculator;
/// Tool registry and the `Tool` trait.
pub mod registry;
/// Web search tool using DuckDuckGo.
pub mod search;

pub use registry::{Tool, ToolRegistry, UNKNOWN_TOOL};
