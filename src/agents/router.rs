use crate::{
    llm::LLMClient,
    tools::ToolRegistry,
    types::{AgentRun, AppError, Result, ToolInvocation, ToolRequest},
};
use std::sync::Arc;

const TOOL_MARKER: &str = "TOOL:";
const INPUT_MARKER: &str = "INPUT:";

/// Agent that lets the model decide whether a tool is needed for a goal.
///
/// One run is at most two LLM calls: a routing call that either answers
/// directly or names a tool in the fixed two-line format
///
/// ```text
/// TOOL: calculator
/// INPUT: 12*8
/// ```
///
/// and, when a tool was named, a second call that turns the tool result into
/// the final answer.
pub struct ToolAgent {
    llm: Arc<dyn LLMClient>,
    tools: Arc<ToolRegistry>,
}

/// Outcome of the routing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The model answered directly.
    Answer(String),
    /// The model asked for a tool.
    Tool(ToolRequest),
}

impl ToolAgent {
    /// Creates a new ToolAgent over a shared LLM client and tool registry.
    pub fn new(llm: Arc<dyn LLMClient>, tools: Arc<ToolRegistry>) -> Self {
        Self { llm, tools }
    }

    pub fn model_name(&self) -> &str {
        self.llm.model_name()
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Prompt for the first call: answer directly or request a tool.
    pub fn routing_prompt(&self, goal: &str) -> String {
        let tool_list = self
            .tools
            .tool_names()
            .iter()
            .map(|name| format!("- {}", name))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"
You are an intelligent agent.

Goal: {goal}

If a tool is needed, respond EXACTLY in this format:

TOOL: tool_name
INPUT: input_text

Available tools:
{tool_list}

If no tool needed, provide final answer directly.
"#
        )
    }

    /// Prompt for the second call, carrying the tool result back to the model.
    pub fn final_prompt(goal: &str, tool_name: &str, tool_result: &str) -> String {
        format!(
            r#"
Goal: {goal}

Tool used: {tool_name}
Tool result: {tool_result}

Now provide the final answer.
"#
        )
    }

    /// Parse the routing reply.
    ///
    /// Any reply containing `TOOL:` takes the tool branch. Line 1 is then read
    /// as the tool name and line 2 as the input, whatever they start with:
    /// every `TOOL:` is removed from line 1, every `INPUT:` from line 2, and
    /// both are trimmed. A tool-branch reply with no second line is malformed.
    pub fn parse_route(output: &str) -> Result<Route> {
        if !output.contains(TOOL_MARKER) {
            return Ok(Route::Answer(output.to_string()));
        }

        let mut lines = output.split('\n');
        let name_line = lines.next().unwrap_or_default();
        let input_line = lines.next().ok_or_else(|| {
            AppError::LLM(format!(
                "Tool request is missing the INPUT line: {:?}",
                output
            ))
        })?;

        Ok(Route::Tool(ToolRequest {
            name: name_line.replace(TOOL_MARKER, "").trim().to_string(),
            input: input_line.replace(INPUT_MARKER, "").trim().to_string(),
        }))
    }

    /// Dispatch to a registered tool; unknown names yield `"Unknown tool"`.
    pub async fn route_tool(&self, tool_name: &str, tool_input: &str) -> Result<String> {
        self.tools.route(tool_name, tool_input).await
    }

    /// Run one goal-to-answer cycle and return the final answer.
    pub async fn run(&self, goal: &str) -> Result<String> {
        Ok(self.run_traced(goal).await?.answer)
    }

    /// Run one goal-to-answer cycle, keeping a trace of what happened.
    #[tracing::instrument(skip(self, goal), fields(model = %self.llm.model_name(), goal_len = goal.len()))]
    pub async fn run_traced(&self, goal: &str) -> Result<AgentRun> {
        let llm_output = self.llm.generate(&self.routing_prompt(goal)).await?;
        tracing::debug!(reply = %llm_output, "Routing reply");

        let request = match Self::parse_route(&llm_output)? {
            Route::Answer(answer) => {
                return Ok(AgentRun {
                    goal: goal.to_string(),
                    answer,
                    tool: None,
                    llm_calls: 1,
                });
            }
            Route::Tool(request) => request,
        };

        tracing::info!(tool = %request.name, input = %request.input, "Dispatching tool");
        let tool_result = self.route_tool(&request.name, &request.input).await?;

        let answer = self
            .llm
            .generate(&Self::final_prompt(goal, &request.name, &tool_result))
            .await?;

        Ok(AgentRun {
            goal: goal.to_string(),
            answer,
            tool: Some(ToolInvocation {
                name: request.name,
                input: request.input,
                result: tool_result,
            }),
            llm_calls: 2,
        })
    }
}
