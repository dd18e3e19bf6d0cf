//! Batch lookup and shaping of group rank badges.

use std::collections::HashMap;

use itertools::Itertools;

use super::models::{RankBadge, RankId, UserId, UserRankMap};
use super::traits::{GroupRankStore, RankResolver, Result};

/// Service translating user ids into ordered rank badge lists.
///
/// # Type Parameters
///
/// * `S` - GroupRankStore implementation for membership queries
/// * `R` - RankResolver implementation for rank display metadata
///
/// # Examples
///
/// ```ignore
/// let service = RankLookupService::new(PgGroupRankStore::new(pool.clone()), PgRankResolver::new(pool));
/// let badges = service.badges_for_user(UserId::new(42)).await?;
/// ```
pub struct RankLookupService<S, R>
where
    S: GroupRankStore,
    R: RankResolver,
{
    store: S,
    resolver: R,
}

impl<S, R> RankLookupService<S, R>
where
    S: GroupRankStore,
    R: RankResolver,
{
    pub fn new(store: S, resolver: R) -> Self {
        Self { store, resolver }
    }

    /// Fetch the rank ids of every qualifying group membership for the given
    /// users.
    ///
    /// Duplicate input ids are tolerated and collapse into one query. An empty
    /// input short-circuits to an empty map without touching the database.
    /// Users without qualifying memberships are absent from the result; each
    /// present user maps to rank ids in ascending order.
    pub async fn lookup_group_ranks(
        &self,
        user_ids: &[UserId],
    ) -> Result<HashMap<UserId, Vec<RankId>>> {
        let user_ids: Vec<UserId> = user_ids.iter().copied().unique().collect();
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = self.store.group_ranks(&user_ids).await?;

        // Rows arrive ordered by ascending rank; per-user append keeps it.
        let mut ranks: HashMap<UserId, Vec<RankId>> = HashMap::new();
        for row in rows {
            ranks.entry(row.user_id).or_default().push(row.group_rank);
        }

        Ok(ranks)
    }

    /// Resolve every rank id in the map to its badge image.
    ///
    /// Resolver results are memoized per rank id for the duration of one
    /// call, so users sharing a rank cost a single metadata lookup. Unknown
    /// ids and resolver failures degrade to a badge with an empty image
    /// reference instead of failing the batch. Per-user ordering is
    /// preserved.
    pub async fn resolve_badges(
        &self,
        ranks: &HashMap<UserId, Vec<RankId>>,
    ) -> Result<UserRankMap> {
        let mut images: HashMap<RankId, String> = HashMap::new();
        let mut badges = UserRankMap::with_capacity(ranks.len());

        for (&user_id, rank_ids) in ranks {
            let mut user_badges = Vec::with_capacity(rank_ids.len());
            for &rank_id in rank_ids {
                let image = match images.get(&rank_id) {
                    Some(image) => image.clone(),
                    None => {
                        let image = self.resolve_image(rank_id).await;
                        images.insert(rank_id, image.clone());
                        image
                    }
                };
                user_badges.push(RankBadge::new(image));
            }
            badges.insert(user_id, user_badges);
        }

        Ok(badges)
    }

    /// Badge list for a single user.
    ///
    /// A user without qualifying ranks yields an empty list, never an error.
    pub async fn badges_for_user(&self, user_id: UserId) -> Result<Vec<RankBadge>> {
        let mut badges = self.badges_for_users(&[user_id]).await?;
        Ok(badges.remove(&user_id).unwrap_or_default())
    }

    /// Batch composition of [`lookup_group_ranks`](Self::lookup_group_ranks)
    /// and [`resolve_badges`](Self::resolve_badges).
    pub async fn badges_for_users(&self, user_ids: &[UserId]) -> Result<UserRankMap> {
        let ranks = self.lookup_group_ranks(user_ids).await?;
        self.resolve_badges(&ranks).await
    }

    async fn resolve_image(&self, rank_id: RankId) -> String {
        match self.resolver.rank_info(rank_id).await {
            Ok(Some(info)) => info.image,
            Ok(None) => {
                tracing::warn!(%rank_id, "no metadata for rank, using empty badge image");
                String::new()
            }
            Err(err) => {
                tracing::warn!(%rank_id, error = %err, "rank metadata lookup failed, using empty badge image");
                String::new()
            }
        }
    }
}
