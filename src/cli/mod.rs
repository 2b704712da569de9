//! CLI module
//!
//! Command-line parsing for the `tool-router` binary. Uses clap for argument
//! parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};

/// Single-turn tool routing agent
#[derive(Parser, Debug)]
#[command(
    name = "tool-router",
    version,
    about = "tool-router - single-turn LLM tool routing agent",
    long_about = "Asks an LLM whether a tool is needed for a goal, runs the tool it names\n\
                  (calculator or web_search), and asks the LLM again for the final answer.\n\n\
                  Run without arguments to start the web form, or use 'run' for a one-shot answer.",
    after_help = "EXAMPLES:\n    \
                  tool-router                           # Serve the web form on 127.0.0.1:3000\n    \
                  tool-router serve --port 8080         # Serve on another port\n    \
                  tool-router run \"What is 12 * 8?\"     # Answer one goal in the terminal\n    \
                  tool-router run --trace \"Explain recursion\"\n    \
                  tool-router tools                     # List registered tools"
)]
pub struct Cli {
    /// LLM provider (groq, openai, ollama)
    #[arg(long, env = "LLM_PROVIDER", global = true)]
    pub provider: Option<String>,

    /// Model identifier
    #[arg(short, long, env = "LLM_MODEL", global = true)]
    pub model: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Serve the single-page form and JSON API
    Serve {
        /// Host address to bind
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// Run the agent once and print the answer
    Run {
        /// The goal to hand to the agent
        goal: String,

        /// Also print which tool ran, its input and its result
        #[arg(long)]
        trace: bool,
    },

    /// List the registered tools
    Tools,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
