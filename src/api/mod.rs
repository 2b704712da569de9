//! HTTP API Handlers and Routes
//!
//! # Endpoints
//!
//! - `GET /` - Single-page form: one goal input and a "Run Agent" button
//! - `POST /api/run` - Run the agent on `{"goal": "..."}`
//! - `GET /api/tools` - List registered tools
//! - `GET /api/openapi.json` - OpenAPI document
//! - `GET /health` - Health check

/// Request handlers for all endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

pub use routes::{ApiDoc, create_router};
