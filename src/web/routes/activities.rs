use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use http::header::LOCATION;
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::activities_service;

/// `GET /` sends visitors to the static landing page.
pub async fn root_handler() -> Response {
    (StatusCode::FOUND, [(LOCATION, "/static/index.html")]).into_response()
}

/// `GET /activities` returns every activity without its roster.
pub async fn activities_handler(State(pool): State<SqlitePool>) -> Response {
    match activities_service::list_activities(&pool).await {
        Ok(activities) => Json(activities).into_response(),
        Err(e) => {
            warn!("Activities list failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
