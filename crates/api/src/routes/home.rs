use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HomeResponse {
    message: &'static str,
}

/// GET / -- availability probe.
async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Hello World",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
