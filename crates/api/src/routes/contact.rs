//! Route definitions for the contact intake service.
//!
//! Mounted under `/api` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact::submit_contact))
        .route("/contacts", get(contact::list_contacts))
}
