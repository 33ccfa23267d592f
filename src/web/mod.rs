pub mod routes;

use axum::{
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

/// Build the full application router. Kept separate from `main` so tests can
/// drive the app without binding a socket.
pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(routes::activities::root_handler))
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/{activity_name}/signup",
            post(routes::activity::signup_handler),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(routes::activity::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new())
        .with_state(pool)
}
