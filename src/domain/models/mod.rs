mod badge;
mod group_rank;
mod ids;

pub use badge::*;
pub use group_rank::*;
pub use ids::*;
