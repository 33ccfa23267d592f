// One row per (activity, email) pair; the composite primary key keeps
// an email from appearing twice on the same roster.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityParticipantsRow {
    pub activity_id: i64,
    pub email: String,
    pub signed_up_at: Option<String>,
}
