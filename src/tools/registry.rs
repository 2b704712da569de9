use crate::types::{Result, ToolDefinition};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Result string handed back to the model when it asks for a tool that isn't registered.
pub const UNKNOWN_TOOL: &str = "Unknown tool";

/// A named, single-input single-output text function the agent can invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    async fn execute(&self, input: &str) -> Result<String>;
}

pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Create a new registry with the default tools (calculator, web search)
    pub fn with_default_tools() -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(crate::tools::calculator::Calculator));
        registry.register(Arc::new(crate::tools::search::SearchTool::new()));

        registry
    }

    /// Register a tool under its own name, replacing any tool already using it
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get_tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
            })
            .collect()
    }

    /// Dispatch `input` to the tool registered as `name`.
    ///
    /// Lookup is exact and case-sensitive. An unregistered name is not an
    /// error: it yields [`UNKNOWN_TOOL`] and no tool runs. Failures from a
    /// registered tool are returned as-is.
    pub async fn route(&self, name: &str, input: &str) -> Result<String> {
        match self.tools.get(name) {
            Some(tool) => tool.execute(input).await,
            None => {
                tracing::warn!(tool = %name, "Model requested an unregistered tool");
                Ok(UNKNOWN_TOOL.to_string())
            }
        }
    }

    /// Get a list of all registered tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
