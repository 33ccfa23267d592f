use sqlx::SqlitePool;

use crate::models::ActivityParticipantsRow;

const SQL_LIST_FOR_ACTIVITY: &str = r#"
SELECT
  activity_id,
  email,
  signed_up_at
FROM activity_participants
WHERE activity_id = ?
ORDER BY signed_up_at ASC, email ASC
"#;

pub async fn list_for_activity(
    pool: &SqlitePool,
    activity_id: i64,
) -> sqlx::Result<Vec<ActivityParticipantsRow>> {
    sqlx::query_as::<_, ActivityParticipantsRow>(SQL_LIST_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_all(pool)
        .await
}

const SQL_IS_REGISTERED: &str = r#"
SELECT EXISTS (
  SELECT 1
  FROM activity_participants
  WHERE activity_id = ?
    AND email = ?
)
"#;

pub async fn is_registered(
    pool: &SqlitePool,
    activity_id: i64,
    email: &str,
) -> sqlx::Result<bool> {
    sqlx::query_scalar::<_, bool>(SQL_IS_REGISTERED)
        .bind(activity_id)
        .bind(email)
        .fetch_one(pool)
        .await
}

const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO activity_participants (
  activity_id,
  email
) VALUES (?, ?)
"#;

pub async fn insert_participant(
    pool: &SqlitePool,
    activity_id: i64,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PARTICIPANT)
        .bind(activity_id)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_DELETE_PARTICIPANT: &str = r#"
DELETE FROM activity_participants
WHERE activity_id = ?
  AND email = ?
"#;

pub async fn delete_participant(
    pool: &SqlitePool,
    activity_id: i64,
    email: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_PARTICIPANT)
        .bind(activity_id)
        .bind(email)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
