mod postgres;

pub use postgres::PgGroupRankStore;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::MockGroupRankStore;
