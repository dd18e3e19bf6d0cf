use super::{RankId, UserId};

/// One qualifying group membership, as returned by a
/// [`GroupRankStore`](crate::domain::GroupRankStore) query.
///
/// A user belonging to several ranked groups produces one row per group.
/// Rows arrive ordered by ascending rank value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserGroupRank {
    pub user_id: UserId,
    pub group_rank: RankId,
}
