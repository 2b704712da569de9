//! Mock implementations for testing.
//!
//! Shared by the integration tests so none of them needs a network
//! connection or an API key.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tool_router::tools::Tool;
use tool_router::types::{AppError, Result};
use tool_router::{ToolAgent, ToolRegistry, LLMClient};

/// Mock LLM client that replays a script of replies and records every prompt.
///
/// Each call to `generate` pops the next scripted reply. Running past the end
/// of the script is reported as an LLM error so a test that makes more calls
/// than expected fails loudly.
pub struct ScriptedLLMClient {
    replies: Mutex<VecDeque<Result<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLLMClient {
    /// Create a client that answers with `replies`, in order.
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| Ok(r.to_string())).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a client whose `n`th call (0-based) fails.
    pub fn failing_at(replies: &[&str], n: usize) -> Self {
        let mut script: VecDeque<Result<String>> =
            replies.iter().map(|r| Ok(r.to_string())).collect();
        script.insert(n, Err(AppError::LLM("Mock LLM failure".to_string())));
        Self {
            replies: Mutex::new(script),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LLMClient for ScriptedLLMClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::LLM("Script exhausted".to_string())))
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Mock tool that records its inputs and returns a fixed result.
pub struct RecordingTool {
    name: String,
    result: Result<String>,
    inputs: Mutex<Vec<String>>,
}

impl RecordingTool {
    pub fn new(name: &str, result: &str) -> Self {
        Self {
            name: name.to_string(),
            result: Ok(result.to_string()),
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            result: Err(AppError::Tool("Mock tool failure".to_string())),
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl Tool for RecordingTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Records its inputs"
    }

    async fn execute(&self, input: &str) -> Result<String> {
        self.inputs.lock().unwrap().push(input.to_string());
        match &self.result {
            Ok(text) => Ok(text.clone()),
            Err(e) => Err(AppError::Tool(e.to_string())),
        }
    }
}

/// Agent over a scripted LLM and the given recording tools.
pub fn agent_with(
    llm: Arc<ScriptedLLMClient>,
    tools: &[Arc<RecordingTool>],
) -> ToolAgent {
    let mut registry = ToolRegistry::new();
    for tool in tools {
        registry.register(tool.clone());
    }
    ToolAgent::new(llm, Arc::new(registry))
}
