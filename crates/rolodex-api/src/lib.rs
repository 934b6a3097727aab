//! Rolodex API - HTTP resource layer for the person directory
//!
//! Thin plumbing over `rolodex-core`: routes map verbs and paths onto
//! service calls, and the error mapper translates the two business error
//! kinds into their status codes (404 for unresolved ids, 409 for a taken
//! email).

pub mod error;
pub mod middleware;
pub mod person;
pub mod state;

pub use state::AppState;

use axum::middleware::from_fn;
use axum::Router;

/// Assemble the full application router over the given state
pub fn app(state: AppState) -> Router {
    person::router()
        .layer(from_fn(middleware::request_id))
        .with_state(state)
}
