pub mod health;
pub mod pets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pets                                            list, create
/// /pets/{id}                                       get, replace, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/pets", pets::router())
}
