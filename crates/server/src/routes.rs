pub mod admin;
pub mod auth;
pub mod listings;
pub mod products;
pub mod reviews;

use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::AppState;

/// Multipart overhead allowed on top of the image size limit.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: form posts, JSON reads and static files.
pub fn build_router(state: AppState, public_dir: impl AsRef<Path>, cors: CorsLayer) -> Router {
    let listing_body_limit = state.listings.images().max_bytes() + FORM_OVERHEAD_BYTES;
    let static_dir = ServeDir::new(public_dir.as_ref());

    let listing_routes = Router::new()
        .route("/api/listings", get(listings::list))
        .route(
            "/add-listing",
            post(listings::add).layer(DefaultBodyLimit::max(listing_body_limit)),
        )
        .route("/delete-listing", post(listings::delete));

    let review_routes = Router::new()
        .route("/api/reviews", get(reviews::list))
        .route("/submit-review", post(reviews::submit));

    let product_routes = Router::new()
        .route("/api/products", get(products::list))
        .route("/add-product", post(products::add));

    let auth_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login));

    let admin_routes = Router::new()
        .route("/admin/users", get(admin::list_users))
        .route("/delete-user", post(admin::delete_user));

    Router::new()
        .route("/health", get(health))
        .merge(listing_routes)
        .merge(review_routes)
        .merge(product_routes)
        .merge(auth_routes)
        .merge(admin_routes)
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
