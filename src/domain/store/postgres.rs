//! PostgreSQL group rank store reading the forum's membership tables.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::models::{RankId, UserGroupRank, UserId};
use crate::domain::traits::{GroupRankStore, Result};

/// PostgreSQL-backed membership store.
///
/// Joins group assignments against group definitions so that only active
/// memberships in groups carrying a rank survive the query. The forum owns
/// these tables; this side only reads them.
#[derive(Clone)]
pub struct PgGroupRankStore {
    pool: PgPool,
}

impl PgGroupRankStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRankStore for PgGroupRankStore {
    async fn group_ranks(&self, user_ids: &[UserId]) -> Result<Vec<UserGroupRank>> {
        let ids: Vec<i32> = user_ids.iter().map(|id| id.as_i32()).collect();

        let rows = sqlx::query_as::<_, GroupRankRow>(
            r#"
            SELECT ug.user_id, g.group_rank
            FROM user_groups ug
            JOIN groups g ON g.group_id = ug.group_id
            WHERE ug.user_id = ANY($1)
              AND ug.user_pending = FALSE
              AND g.group_rank <> 0
            ORDER BY g.group_rank ASC
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| UserGroupRank {
                user_id: UserId::new(row.user_id),
                group_rank: RankId::new(row.group_rank),
            })
            .collect())
    }
}

// Row types for sqlx queries

#[derive(sqlx::FromRow)]
struct GroupRankRow {
    user_id: i32,
    group_rank: i32,
}
