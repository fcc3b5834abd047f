pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use state::{AppState, SharedState};

/// Build the full route table over the shared app state
pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::list_notes).post(handlers::create_note))
        .route("/search", get(handlers::search_notes))
        .route("/new", get(handlers::new_note_form))
        .route(
            "/:id/edit",
            get(handlers::edit_note_form).post(handlers::update_note),
        )
        .route("/:id/delete", post(handlers::delete_note))
        .route("/:id/star", post(handlers::star_note))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
