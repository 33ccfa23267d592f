use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::activities_repo;
use crate::models::ActivitiesRow;

/// What `GET /activities` returns per activity. Participants are deliberately
/// not part of this representation; the roster is only read through the
/// signup paths.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityView {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub time: String,
    pub category: Option<String>,
}

impl From<ActivitiesRow> for ActivityView {
    fn from(row: ActivitiesRow) -> Self {
        ActivityView {
            id: row.id,
            name: row.name,
            description: row.description,
            time: row.time,
            category: row.category,
        }
    }
}

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityView>> {
    let rows = activities_repo::list_activities(pool).await?;
    Ok(rows.into_iter().map(ActivityView::from).collect())
}
