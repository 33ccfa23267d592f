use sqlx::SqlitePool;
use tracing::info;

use crate::database::activities_repo::{self, NewActivity};

pub struct SeedActivity {
    pub name: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub category: &'static str,
}

/// Initial activities data, used to populate an empty database.
pub fn default_seed() -> Vec<SeedActivity> {
    vec![
        SeedActivity {
            name: "Chess Club",
            description: "Learn strategies and compete in chess tournaments",
            time: "Fridays, 3:30 PM - 5:00 PM",
            category: "Academic",
        },
        SeedActivity {
            name: "Programming Class",
            description: "Learn programming fundamentals and build software projects",
            time: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            category: "Academic",
        },
        SeedActivity {
            name: "Gym Class",
            description: "Physical education and sports activities",
            time: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            category: "Sports",
        },
        SeedActivity {
            name: "Soccer Team",
            description: "Join the school soccer team and compete in matches",
            time: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            category: "Sports",
        },
        SeedActivity {
            name: "Basketball Team",
            description: "Practice and play basketball with the school team",
            time: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            category: "Sports",
        },
        SeedActivity {
            name: "Art Club",
            description: "Explore your creativity through painting and drawing",
            time: "Thursdays, 3:30 PM - 5:00 PM",
            category: "Arts",
        },
        SeedActivity {
            name: "Drama Club",
            description: "Act, direct, and produce plays and performances",
            time: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            category: "Arts",
        },
        SeedActivity {
            name: "Math Club",
            description: "Solve challenging problems and participate in math competitions",
            time: "Tuesdays, 3:30 PM - 4:30 PM",
            category: "Academic",
        },
        SeedActivity {
            name: "Debate Team",
            description: "Develop public speaking and argumentation skills",
            time: "Fridays, 4:00 PM - 5:30 PM",
            category: "Academic",
        },
    ]
}

/// Populate the activities table from `seed` iff it is empty. Called once at
/// startup before the server accepts requests; calling it again is a no-op.
pub async fn initialize(pool: &SqlitePool, seed: &[SeedActivity]) -> sqlx::Result<()> {
    if activities_repo::count_activities(pool).await? > 0 {
        return Ok(());
    }

    for activity in seed {
        activities_repo::insert_activity(
            pool,
            NewActivity {
                name: activity.name,
                description: Some(activity.description),
                time: activity.time,
                category: Some(activity.category),
            },
        )
        .await?;
    }
    info!("Seeded {} activities", seed.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{activities_repo, schema};
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn initialize_is_a_noop_when_data_is_present() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        schema::ensure_schema(&pool).await.unwrap();

        initialize(&pool, &default_seed()).await.unwrap();
        initialize(&pool, &default_seed()).await.unwrap();

        let count = activities_repo::count_activities(&pool).await.unwrap();
        assert_eq!(count, default_seed().len() as i64);
    }
}
