use sqlx::SqlitePool;
use thiserror::Error;

use crate::database::{activities_repo, participants_repo};
use crate::models::ActivitiesRow;

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadyRegistered,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

async fn require_activity(pool: &SqlitePool, name: &str) -> Result<ActivitiesRow, SignupError> {
    activities_repo::find_by_name(pool, name)
        .await?
        .ok_or(SignupError::ActivityNotFound)
}

/// Add `email` to the roster of the named activity. Existence and duplicate
/// checks run before the insert with no transaction around them; the composite
/// primary key on the roster table backstops the window between check and
/// insert.
pub async fn signup(pool: &SqlitePool, activity_name: &str, email: &str) -> Result<(), SignupError> {
    let activity = require_activity(pool, activity_name).await?;

    if participants_repo::is_registered(pool, activity.id, email).await? {
        return Err(SignupError::AlreadyRegistered);
    }

    participants_repo::insert_participant(pool, activity.id, email).await?;
    Ok(())
}

/// Remove `email` from the roster of the named activity.
pub async fn unregister(
    pool: &SqlitePool,
    activity_name: &str,
    email: &str,
) -> Result<(), SignupError> {
    let activity = require_activity(pool, activity_name).await?;

    if !participants_repo::is_registered(pool, activity.id, email).await? {
        return Err(SignupError::NotRegistered);
    }

    participants_repo::delete_participant(pool, activity.id, email).await?;
    Ok(())
}

/// Roster emails for the named activity, in signup order.
pub async fn participants_for(
    pool: &SqlitePool,
    activity_name: &str,
) -> Result<Vec<String>, SignupError> {
    let activity = require_activity(pool, activity_name).await?;
    let rows = participants_repo::list_for_activity(pool, activity.id).await?;
    Ok(rows.into_iter().map(|r| r.email).collect())
}
