use crate::{
    AppState,
    types::{AgentRun, Result, RunRequest},
};
use axum::{Json, extract::State};

/// Run the agent on a goal
#[utoipa::path(
    post,
    path = "/api/run",
    request_body = RunRequest,
    responses(
        (status = 200, description = "Final answer with run trace", body = AgentRun),
        (status = 502, description = "LLM provider or tool failed")
    ),
    tag = "agent"
)]
pub async fn run_agent(
    State(state): State<AppState>,
    Json(payload): Json<RunRequest>,
) -> Result<Json<AgentRun>> {
    let run = state.agent.run_traced(&payload.goal).await.map_err(|e| {
        tracing::error!(error = %e, "Agent run failed");
        e
    })?;

    Ok(Json(run))
}
