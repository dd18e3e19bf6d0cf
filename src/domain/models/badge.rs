use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::UserId;

/// One rank badge as handed to the rendering layer.
///
/// The image reference is empty when the rank has no metadata; the host
/// decides how to render (or skip) such badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankBadge {
    pub image: String,
}

impl RankBadge {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
        }
    }
}

/// Rank metadata as returned by a [`RankResolver`](crate::domain::RankResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankInfo {
    pub title: String,
    pub image: String,
}

impl From<RankInfo> for RankBadge {
    fn from(info: RankInfo) -> Self {
        Self { image: info.image }
    }
}

/// Badges per user, as produced by one batch lookup.
///
/// Users without any qualifying membership are absent from the map; the
/// per-user order is ascending rank and is significant.
pub type UserRankMap = HashMap<UserId, Vec<RankBadge>>;
