//! PostgreSQL rank resolver reading the forum's rank definitions.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::models::{RankId, RankInfo};
use crate::domain::traits::{RankResolver, Result};

/// PostgreSQL-backed rank metadata resolver.
#[derive(Clone)]
pub struct PgRankResolver {
    pool: PgPool,
}

impl PgRankResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RankResolver for PgRankResolver {
    async fn rank_info(&self, rank_id: RankId) -> Result<Option<RankInfo>> {
        let row = sqlx::query_as::<_, RankRow>(
            r#"
            SELECT rank_title, rank_image
            FROM ranks
            WHERE rank_id = $1
            "#,
        )
        .bind(rank_id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| RankInfo {
            title: row.rank_title,
            image: row.rank_image,
        }))
    }
}

// Row types for sqlx queries

#[derive(sqlx::FromRow)]
struct RankRow {
    rank_title: String,
    rank_image: String,
}
