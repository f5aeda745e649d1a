//! Route table.
//!
//! | path               | handler             |
//! |--------------------|---------------------|
//! | `/`                | welcome text        |
//! | `/people`          | all people          |
//! | `/ccount`          | per-country counts  |
//! | `/country/`        | all people          |
//! | `/country/{*rest}` | people in a country |

use crate::handlers;
use crate::state::AppState;
use axum::routing::any;
use axum::Router;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::home))
        .route("/people", any(handlers::list_people))
        .route("/ccount", any(handlers::country_counts))
        .route("/country/", any(handlers::list_people))
        .route("/country/{*rest}", any(handlers::people_by_country))
        .with_state(state)
}
