//! Route definitions for owie logging.
//!
//! ```text
//! POST /owie/{body_part} -> log_owie
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::owies;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/owie/{body_part}", post(owies::log_owie))
}
