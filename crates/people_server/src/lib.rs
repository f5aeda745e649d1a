//! HTTP surface of the people API.
//!
//! # Responsibility
//! - Map request paths to person queries and encode results as JSON.
//! - Turn query failures into per-request error responses.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
