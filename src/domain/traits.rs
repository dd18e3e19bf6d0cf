//! Trait definitions for the host-facing seams.
//!
//! These traits enable dependency injection and easy testing through mocking:
//! the forum host supplies the rendering side, while the crate ships Postgres
//! implementations of the two read capabilities.

use async_trait::async_trait;
use thiserror::Error;

use super::models::{RankBadge, RankId, RankInfo, UserGroupRank, UserId};

/// Error type for rank lookup operations.
#[derive(Debug, Error)]
pub enum RankError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Rank metadata error: {0}")]
    Resolver(String),
}

pub type Result<T> = std::result::Result<T, RankError>;

/// Read access to the forum's group membership tables.
///
/// Implementations return one row per qualifying membership: the membership
/// must not be pending and the group's rank value must be non-zero. Rows are
/// restricted to the requested user ids and ordered by ascending rank value.
#[async_trait]
pub trait GroupRankStore: Send + Sync {
    /// Fetch `(user_id, group_rank)` rows for the given users.
    ///
    /// Callers are expected to pass a deduplicated id set; the query itself
    /// imposes no further dedup.
    async fn group_ranks(&self, user_ids: &[UserId]) -> Result<Vec<UserGroupRank>>;
}

/// Lookup of display metadata for a single rank id.
///
/// The returned record carries at least the badge image reference; `Ok(None)`
/// signals an unknown rank id.
#[async_trait]
pub trait RankResolver: Send + Sync {
    async fn rank_info(&self, rank_id: RankId) -> Result<Option<RankInfo>>;
}

/// Mutation capability for the view being rendered.
///
/// The host maps each appended badge onto its template machinery, typically a
/// repeating `extra_ranks` block with one image variable per entry.
pub trait RenderSink: Send {
    fn append_extra_rank(&mut self, badge: &RankBadge);
}
