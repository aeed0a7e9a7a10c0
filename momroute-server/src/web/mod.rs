//! Web layer for the accessible route planner.
//!
//! Provides HTTP endpoints for planning and scoring routes, plus the
//! current elevator outage list.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
