mod common;
mod fixture;
mod leaderboard;
mod league;
mod match_result;
mod query;

pub use common::*;
pub use fixture::*;
pub use leaderboard::*;
pub use league::*;
pub use match_result::*;
pub use query::*;
