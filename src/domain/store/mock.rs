//! Mock group rank store for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::models::{RankId, UserGroupRank, UserId};
use crate::domain::traits::{GroupRankStore, Result};

/// Mock membership store backed by an in-memory membership list.
///
/// Mirrors the query semantics of the real store: pending memberships and
/// unranked groups never show up, only requested users are returned, and
/// rows come back ordered by ascending rank.
///
/// # Examples
///
/// ```ignore
/// let store = MockGroupRankStore::new()
///     .with_membership(UserId::new(1), RankId::new(3))
///     .with_pending_membership(UserId::new(2), RankId::new(5));
/// ```
#[derive(Clone, Default)]
pub struct MockGroupRankStore {
    memberships: Arc<RwLock<Vec<MockMembership>>>,
    /// Every id slice the store was queried with (for test assertions)
    queries: Arc<RwLock<Vec<Vec<UserId>>>>,
}

#[derive(Clone, Copy)]
struct MockMembership {
    user_id: UserId,
    group_rank: RankId,
    pending: bool,
}

#[allow(dead_code)]
impl MockGroupRankStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active membership in a group carrying the given rank.
    pub fn with_membership(self, user_id: UserId, group_rank: RankId) -> Self {
        self.push(user_id, group_rank, false)
    }

    /// Add a membership that is still awaiting approval.
    pub fn with_pending_membership(self, user_id: UserId, group_rank: RankId) -> Self {
        self.push(user_id, group_rank, true)
    }

    /// Number of queries issued so far.
    pub fn query_count(&self) -> usize {
        self.queries.read().unwrap().len()
    }

    /// The id slices each query was issued with (for test assertions).
    pub fn queried_ids(&self) -> Vec<Vec<UserId>> {
        self.queries.read().unwrap().clone()
    }

    fn push(self, user_id: UserId, group_rank: RankId, pending: bool) -> Self {
        {
            let mut memberships = self.memberships.write().unwrap();
            memberships.push(MockMembership {
                user_id,
                group_rank,
                pending,
            });
        }
        self
    }
}

#[async_trait]
impl GroupRankStore for MockGroupRankStore {
    async fn group_ranks(&self, user_ids: &[UserId]) -> Result<Vec<UserGroupRank>> {
        self.queries.write().unwrap().push(user_ids.to_vec());

        let memberships = self.memberships.read().unwrap();
        let mut rows: Vec<UserGroupRank> = memberships
            .iter()
            .filter(|m| !m.pending && !m.group_rank.is_unranked() && user_ids.contains(&m.user_id))
            .map(|m| UserGroupRank {
                user_id: m.user_id,
                group_rank: m.group_rank,
            })
            .collect();

        // Stable sort keeps insertion order between equal ranks
        rows.sort_by_key(|row| row.group_rank);

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32) -> UserId {
        UserId::new(id)
    }

    fn rank(id: i32) -> RankId {
        RankId::new(id)
    }

    #[tokio::test]
    async fn rows_come_back_in_ascending_rank_order() {
        let store = MockGroupRankStore::new()
            .with_membership(user(1), rank(8))
            .with_membership(user(1), rank(2))
            .with_membership(user(1), rank(5));

        let rows = store.group_ranks(&[user(1)]).await.unwrap();

        let ranks: Vec<RankId> = rows.iter().map(|r| r.group_rank).collect();
        assert_eq!(ranks, vec![rank(2), rank(5), rank(8)]);
    }

    #[tokio::test]
    async fn pending_and_unranked_memberships_are_filtered_out() {
        let store = MockGroupRankStore::new()
            .with_membership(user(1), rank(3))
            .with_membership(user(1), rank(0))
            .with_pending_membership(user(1), rank(6));

        let rows = store.group_ranks(&[user(1)]).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].group_rank, rank(3));
    }

    #[tokio::test]
    async fn only_requested_users_are_returned() {
        let store = MockGroupRankStore::new()
            .with_membership(user(1), rank(3))
            .with_membership(user(2), rank(4));

        let rows = store.group_ranks(&[user(2)]).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_id, user(2));
    }

    #[tokio::test]
    async fn queries_are_recorded() {
        let store = MockGroupRankStore::new();

        store.group_ranks(&[user(1), user(2)]).await.unwrap();
        store.group_ranks(&[user(3)]).await.unwrap();

        assert_eq!(store.query_count(), 2);
        assert_eq!(
            store.queried_ids(),
            vec![vec![user(1), user(2)], vec![user(3)]]
        );
    }
}
