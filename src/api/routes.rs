use crate::AppState;
use crate::api::handlers;
use crate::types::{AgentRun, HealthResponse, RunRequest, ToolDefinition, ToolInvocation};
use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::run::run_agent,
        handlers::status::health,
        handlers::status::list_tools,
    ),
    components(schemas(RunRequest, AgentRun, ToolInvocation, ToolDefinition, HealthResponse)),
    tags(
        (name = "agent", description = "Tool-routing agent"),
        (name = "status", description = "Server status")
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/run", post(handlers::run::run_agent))
        .route("/tools", get(handlers::status::list_tools))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }));

    Router::new()
        .route("/", get(handlers::ui::index))
        .route("/assets/{*path}", get(handlers::ui::asset))
        .route("/health", get(handlers::status::health))
        .nest("/api", api_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
