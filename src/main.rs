//! tool-router entry point
//!
//! - `tool-router` / `tool-router serve` - serve the single-page form
//! - `tool-router run <goal>` - answer one goal in the terminal
//! - `tool-router tools` - list registered tools

use anyhow::Context;
use std::sync::Arc;
use tool_router::{
    AppState, Config, Provider, ToolAgent, ToolRegistry,
    api::create_router,
    cli::{Cli, Commands, output::Output},
    utils::logging,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Err(e) = run(cli, &output).await {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &Output) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(provider) = cli.provider {
        config.llm.provider = provider;
    }
    if let Some(model) = cli.model {
        config.llm.model = model;
    }
    if cli.verbose {
        config.logging.filter = "debug".to_string();
    }
    logging::init(&config.logging);

    let tools = Arc::new(ToolRegistry::with_default_tools());

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    match command {
        Commands::Tools => output.tools(&tools.get_tool_definitions()),
        Commands::Run { goal, trace } => {
            let (agent, _) = build_agent(&config, tools)?;
            let run = agent.run_traced(&goal).await?;
            if trace {
                output.trace(&run);
                output.header("Answer");
            }
            output.answer(&run.answer);
        }
        Commands::Serve { host, port } => {
            let tool_names = tools.tool_names().join(", ");
            let (agent, provider) = build_agent(&config, tools)?;
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{}:{}", host, port);

            output.banner(provider.name(), provider.model());
            output.info(&format!("Tools: {}", tool_names));

            let app = create_router(AppState::new(agent, provider.name()));
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;

            output.success(&format!("Listening on http://{}", addr));
            output.hint("Open the address above in a browser and enter a goal.");
            tracing::info!(%addr, provider = provider.name(), model = provider.model(), "Server started");

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
                .context("Server error")?;
        }
    }

    Ok(())
}

fn build_agent(config: &Config, tools: Arc<ToolRegistry>) -> anyhow::Result<(Arc<ToolAgent>, Provider)> {
    let provider = config.llm.provider()?;
    let llm = provider.create_client()?;
    Ok((Arc::new(ToolAgent::new(llm, tools)), provider))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutting down");
    }
}
