//! Product API module
//!
//! Reads are public; create/update/delete require an admin session
//! (enforced per-handler via [`crate::auth::AdminSession`]).

mod form;
mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/products",
            get(handler::list).post(handler::create),
        )
        .route("/api/products/bestsellers", get(handler::best_sellers))
        .route("/api/products/filters", get(handler::filter_facets))
        .route(
            "/api/products/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
}
