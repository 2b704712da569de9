//! Colored output helpers for the CLI

use crate::types::{AgentRun, ToolDefinition};
use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the startup banner
    pub fn banner(&self, provider: &str, model: &str) {
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        if self.colored {
            println!(
                "\n  {} {}  {}",
                "🔧 tool-router".bright_cyan().bold(),
                version.dimmed(),
                format!("{} · {}", provider, model).bright_white()
            );
        } else {
            println!("\n  tool-router {}  {} / {}", version, provider, model);
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print the registered tools
    pub fn tools(&self, tools: &[ToolDefinition]) {
        self.header("Tools");
        for tool in tools {
            if self.colored {
                println!("    {} {}", tool.name.bright_cyan().bold(), tool.description.dimmed());
            } else {
                println!("    - {}: {}", tool.name, tool.description);
            }
        }
    }

    /// Print the tool step of a run, if one happened
    pub fn trace(&self, run: &AgentRun) {
        self.header("Trace");
        self.kv("llm calls", &run.llm_calls.to_string());
        match &run.tool {
            Some(tool) => {
                self.kv("tool", &tool.name);
                self.kv("input", &tool.input);
                self.kv("result", &tool.result);
            }
            None => self.kv("tool", "none (answered directly)"),
        }
    }

    /// Print the final answer. Printed plainly so it can be piped.
    pub fn answer(&self, answer: &str) {
        println!("{}", answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolInvocation;

    #[test]
    fn test_output_new() {
        assert!(Output::new().colored);
        assert!(Output::default().colored);
        assert!(!Output::no_color().colored);
    }

    #[test]
    fn test_output_methods_no_panic() {
        let run = AgentRun {
            goal: "What is 12 * 8?".to_string(),
            answer: "96".to_string(),
            tool: Some(ToolInvocation {
                name: "calculator".to_string(),
                input: "12*8".to_string(),
                result: "96".to_string(),
            }),
            llm_calls: 2,
        };
        let tools = vec![ToolDefinition {
            name: "calculator".to_string(),
            description: "math".to_string(),
        }];

        for output in [Output::new(), Output::no_color()] {
            output.banner("Groq", "llama-3.3-70b-versatile");
            output.success("ok");
            output.info("info");
            output.error("error");
            output.hint("hint");
            output.tools(&tools);
            output.trace(&run);
            output.trace(&AgentRun {
                tool: None,
                llm_calls: 1,
                ..run.clone()
            });
            output.answer(&run.answer);
        }
    }
}
