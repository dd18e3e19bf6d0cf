mod postgres;

pub use postgres::PgRankResolver;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::MockRankResolver;
