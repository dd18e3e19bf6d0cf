//! Print the extra rank badges a set of users would get on a forum page.
//!
//! Usage: `show_ranks <user_id>...`

use anyhow::Result;
use sqlx::PgPool;
use tracing_subscriber::{fmt, EnvFilter};

use extra_ranks::config::read_config;
use extra_ranks::domain::models::UserId;
use extra_ranks::domain::resolver::PgRankResolver;
use extra_ranks::domain::store::PgGroupRankStore;
use extra_ranks::domain::{RankLookupService, RankResolver};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let user_ids: Vec<UserId> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<i32>().map(UserId::new))
        .collect::<Result<_, _>>()?;
    if user_ids.is_empty() {
        eprintln!("usage: show_ranks <user_id>...");
        std::process::exit(1);
    }

    let settings = read_config()?;
    let pool = PgPool::connect_with(settings.database.with_db()).await?;

    let service = RankLookupService::new(
        PgGroupRankStore::new(pool.clone()),
        PgRankResolver::new(pool.clone()),
    );
    let ranks = service.lookup_group_ranks(&user_ids).await?;

    // Resolve directly so the printout can show titles, not just images
    let resolver = PgRankResolver::new(pool);
    for &user_id in &user_ids {
        match ranks.get(&user_id) {
            Some(rank_ids) => {
                println!("user {}:", user_id);
                for &rank_id in rank_ids {
                    match resolver.rank_info(rank_id).await? {
                        Some(info) => println!("  {} ({})", info.title, info.image),
                        None => println!("  rank {} has no metadata", rank_id),
                    }
                }
            }
            None => println!("user {}: no extra ranks", user_id),
        }
    }

    Ok(())
}
