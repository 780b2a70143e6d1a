//! Route definitions for the `/pets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pets;
use crate::state::AppState;

/// Routes mounted at `/pets`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> replace
/// PATCH  /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pets::list).post(pets::create))
        .route(
            "/{id}",
            get(pets::get_by_id)
                .put(pets::replace)
                .patch(pets::update)
                .delete(pets::delete),
        )
}
