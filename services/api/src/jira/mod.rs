pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jira/messages", get(handlers::get_messages))
        .route("/jira/features", post(handlers::render_features))
        .route("/jira/key", post(handlers::render_key))
        .route("/jira/details", post(handlers::render_details))
        .route("/jira/pie", post(handlers::pie))
        .route("/jira/exports", post(handlers::export_links))
        .route("/jira/project", post(handlers::select_project))
        .route("/jira/import/progress", post(handlers::import_progress))
}
