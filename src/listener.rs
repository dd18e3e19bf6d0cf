//! Event-facing surface mapping board view events onto rank lookups.

use sqlx::PgPool;
use tracing::instrument;

use crate::domain::models::{RankBadge, UserId, UserRankMap};
use crate::domain::resolver::PgRankResolver;
use crate::domain::store::PgGroupRankStore;
use crate::domain::{GroupRankStore, RankLookupService, RankResolver, RenderSink, Result};

/// Listener wired into the board's view events.
///
/// One instance serves profile views, private message views and topic views.
/// Each hook fetches the extra rank badges earned through group memberships
/// and hands them to the caller's [`RenderSink`].
pub struct ExtraRanksListener<S, R>
where
    S: GroupRankStore,
    R: RankResolver,
{
    service: RankLookupService<S, R>,
}

impl ExtraRanksListener<PgGroupRankStore, PgRankResolver> {
    /// Construct a listener backed by the forum's PostgreSQL database.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(PgGroupRankStore::new(pool.clone()), PgRankResolver::new(pool))
    }
}

impl<S, R> ExtraRanksListener<S, R>
where
    S: GroupRankStore,
    R: RankResolver,
{
    pub fn new(store: S, resolver: R) -> Self {
        Self {
            service: RankLookupService::new(store, resolver),
        }
    }

    /// Member profile view: append the profile owner's extra rank badges.
    #[instrument(name = "profile_view_ranks", skip(self, sink))]
    pub async fn on_profile_view(
        &self,
        user_id: UserId,
        sink: &mut dyn RenderSink,
    ) -> Result<()> {
        self.render_user_badges(user_id, sink).await
    }

    /// Private message view: append the author's extra rank badges.
    #[instrument(name = "pm_view_ranks", skip(self, sink))]
    pub async fn on_pm_view(&self, author_id: UserId, sink: &mut dyn RenderSink) -> Result<()> {
        self.render_user_badges(author_id, sink).await
    }

    /// Topic view: resolve badges for every poster on the page in one pass.
    ///
    /// The returned cache is scoped to this topic render; hand each post row
    /// to [`TopicBadgeCache::assign_post_row`] while building the page.
    #[instrument(name = "topic_view_ranks", skip(self, poster_ids))]
    pub async fn on_topic_posts(
        &self,
        poster_ids: impl IntoIterator<Item = UserId>,
    ) -> Result<TopicBadgeCache> {
        let poster_ids: Vec<UserId> = poster_ids.into_iter().collect();
        let badges = self.service.badges_for_users(&poster_ids).await?;

        tracing::debug!(
            posters = poster_ids.len(),
            with_badges = badges.len(),
            "built topic badge cache"
        );

        Ok(TopicBadgeCache { badges })
    }

    async fn render_user_badges(&self, user_id: UserId, sink: &mut dyn RenderSink) -> Result<()> {
        let badges = self.service.badges_for_user(user_id).await?;
        for badge in &badges {
            sink.append_extra_rank(badge);
        }
        Ok(())
    }
}

/// Badges for every poster of one topic render.
///
/// Built once per topic view by [`ExtraRanksListener::on_topic_posts`] and
/// dropped with the render, so badge state never leaks between requests.
#[derive(Debug, Clone, Default)]
pub struct TopicBadgeCache {
    badges: UserRankMap,
}

impl TopicBadgeCache {
    /// Badges for one poster, in ascending rank order.
    ///
    /// Posters without qualifying ranks get an empty slice.
    pub fn badges_for(&self, poster_id: UserId) -> &[RankBadge] {
        self.badges
            .get(&poster_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Append the poster's badges to a post row. No-op for unranked posters.
    pub fn assign_post_row(&self, poster_id: UserId, sink: &mut dyn RenderSink) {
        for badge in self.badges_for(poster_id) {
            sink.append_extra_rank(badge);
        }
    }

    /// Number of posters holding at least one badge.
    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}
