use axum::Router;
use tower_http::cors::{Any, CorsLayer};

/// The site itself is served from a different origin, so the intake endpoints
/// have to accept cross origin requests.
pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
