use crate::{
    AppState,
    types::{HealthResponse, ToolDefinition},
};
use axum::{Json, extract::State};

/// Liveness check, reporting the configured model
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is up", body = HealthResponse)),
    tag = "status"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        provider: state.provider_name.to_string(),
        model: state.agent.model_name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List the tools the agent can route to
#[utoipa::path(
    get,
    path = "/api/tools",
    responses((status = 200, description = "Registered tools", body = [ToolDefinition])),
    tag = "agent"
)]
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDefinition>> {
    Json(state.agent.tools().get_tool_definitions())
}
