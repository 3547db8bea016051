pub mod categories;
pub mod events;

use crate::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        // Events
        .route("/api/events/upcoming", get(events::upcoming))
        .route("/api/events/search", get(events::search))
        .route("/api/events/:id", get(events::get_one))
        // Categories
        .route("/api/categories", get(categories::list))
        .with_state(state)
}
