//! Mock rank resolver for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::models::{RankId, RankInfo};
use crate::domain::traits::{RankResolver, Result};

/// Mock rank resolver backed by an in-memory rank table.
///
/// Unknown ids resolve to `None`, like the real resolver does for a rank
/// that was deleted from the forum.
///
/// # Examples
///
/// ```ignore
/// let resolver = MockRankResolver::new()
///     .with_rank(RankId::new(3), "Moderator", "ranks/moderator.png");
/// ```
#[derive(Clone, Default)]
pub struct MockRankResolver {
    ranks: Arc<RwLock<HashMap<RankId, RankInfo>>>,
    call_count: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockRankResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rank definition.
    pub fn with_rank(self, rank_id: RankId, title: &str, image: &str) -> Self {
        {
            let mut ranks = self.ranks.write().unwrap();
            ranks.insert(
                rank_id,
                RankInfo {
                    title: title.to_string(),
                    image: image.to_string(),
                },
            );
        }
        self
    }

    /// Get the number of times `rank_info` was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call counter.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

#[async_trait]
impl RankResolver for MockRankResolver {
    async fn rank_info(&self, rank_id: RankId) -> Result<Option<RankInfo>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.ranks.read().unwrap().get(&rank_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_rank_resolves_to_its_metadata() {
        let resolver =
            MockRankResolver::new().with_rank(RankId::new(3), "Moderator", "ranks/moderator.png");

        let info = resolver.rank_info(RankId::new(3)).await.unwrap();

        let info = info.unwrap();
        assert_eq!(info.title, "Moderator");
        assert_eq!(info.image, "ranks/moderator.png");
    }

    #[tokio::test]
    async fn unknown_rank_resolves_to_none() {
        let resolver = MockRankResolver::new();

        let info = resolver.rank_info(RankId::new(99)).await.unwrap();

        assert!(info.is_none());
    }

    #[tokio::test]
    async fn mock_tracks_call_count() {
        let resolver = MockRankResolver::new();

        assert_eq!(resolver.call_count(), 0);
        resolver.rank_info(RankId::new(1)).await.unwrap();
        resolver.rank_info(RankId::new(2)).await.unwrap();
        assert_eq!(resolver.call_count(), 2);

        resolver.reset();
        assert_eq!(resolver.call_count(), 0);
    }
}
