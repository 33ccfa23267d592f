use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::signup_service::{self, SignupError};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    match signup_service::signup(&pool, &activity_name, &query.email).await {
        Ok(()) => Json(json!({
            "message": format!("Signed up {} for {}", query.email, activity_name)
        }))
        .into_response(),
        Err(e) => roster_error_response(e),
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(pool): State<SqlitePool>,
) -> Response {
    match signup_service::unregister(&pool, &activity_name, &query.email).await {
        Ok(()) => Json(json!({
            "message": format!("Unregistered {} from {}", query.email, activity_name)
        }))
        .into_response(),
        Err(e) => roster_error_response(e),
    }
}

// Client errors carry their fixed message in a `detail` body; storage
// failures surface as a bare 500.
fn roster_error_response(err: SignupError) -> Response {
    let status = match &err {
        SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
        SignupError::AlreadyRegistered | SignupError::NotRegistered => StatusCode::BAD_REQUEST,
        SignupError::Db(e) => {
            warn!("Roster command failed: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    (status, Json(json!({ "detail": err.to_string() }))).into_response()
}
