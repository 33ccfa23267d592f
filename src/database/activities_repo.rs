use sqlx::SqlitePool;

use crate::models::ActivitiesRow;

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT
  id,
  name,
  description,
  time,
  category,
  created_at,
  updated_at
FROM activities
ORDER BY id ASC
"#;

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<Vec<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_LIST_ACTIVITIES)
        .fetch_all(pool)
        .await
}

const SQL_FIND_BY_NAME: &str = r#"
SELECT
  id,
  name,
  description,
  time,
  category,
  created_at,
  updated_at
FROM activities
WHERE name = ?
"#;

/// Exact, case-sensitive match on `name`; the name is the only identity
/// clients get to use.
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> sqlx::Result<Option<ActivitiesRow>> {
    sqlx::query_as::<_, ActivitiesRow>(SQL_FIND_BY_NAME)
        .bind(name)
        .fetch_optional(pool)
        .await
}

const SQL_COUNT_ACTIVITIES: &str = r#"
SELECT COUNT(*) FROM activities
"#;

pub async fn count_activities(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_ACTIVITIES)
        .fetch_one(pool)
        .await
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  time,
  category
) VALUES (?, ?, ?, ?)
"#;

pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub time: &'a str,
    pub category: Option<&'a str>,
}

pub async fn insert_activity(pool: &SqlitePool, activity: NewActivity<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.time)
        .bind(activity.category)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
