pub mod contact;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /contact                 POST submit_contact
/// /contacts                GET  list_contacts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(contact::router())
}
