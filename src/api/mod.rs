//! HTTP API for the launch panel.
//!
//! ## Endpoints
//!
//! - `POST /agent` - Submit a task and launch an agent process for it
//! - `GET /api/health` - Health check
//! - `GET /*` - Panel static assets (router fallback)

mod routes;
pub mod types;

pub use routes::{router, serve, AppState};
pub use types::*;
