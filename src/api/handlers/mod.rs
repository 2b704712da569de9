//! API request handlers.

/// Agent run handler.
pub mod run;
/// Health check and tool listing.
pub mod status;
/// Embedded single-page front end.
pub mod ui;
