//! Web layer for the departure feed.
//!
//! Provides HTTP endpoints serving station departure feeds and single trains.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
