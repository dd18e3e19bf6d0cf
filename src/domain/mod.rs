//! Group rank lookup - turning forum group memberships into badge lists.
//!
//! # Architecture
//!
//! The lookup pipeline is built around trait abstractions for testability:
//!
//! - [`GroupRankStore`] - membership queries (PostgreSQL, mocks)
//! - [`RankResolver`] - rank display metadata (PostgreSQL, mocks)
//! - [`RenderSink`] - template output owned by the host board
//!
//! # Example
//!
//! ```ignore
//! use extra_ranks::domain::RankLookupService;
//! use extra_ranks::domain::models::UserId;
//! use extra_ranks::domain::resolver::PgRankResolver;
//! use extra_ranks::domain::store::PgGroupRankStore;
//!
//! let service = RankLookupService::new(
//!     PgGroupRankStore::new(pool.clone()),
//!     PgRankResolver::new(pool),
//! );
//!
//! let badges = service.badges_for_user(UserId::new(42)).await?;
//! ```

pub mod models;
mod service;
mod traits;

pub mod resolver;
pub mod store;

// Re-export main types
pub use service::RankLookupService;
pub use traits::{GroupRankStore, RankError, RankResolver, RenderSink, Result};
