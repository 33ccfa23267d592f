#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivitiesRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub time: String,
    pub category: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
