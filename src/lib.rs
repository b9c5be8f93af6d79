//! Client and data shaping for a table-tennis league API: fixtures, match
//! results, leaderboards, and the grouping/filtering the league screens use.

pub use client::LeagueClient;
pub use config::LeagueConfig;
pub use context::AppContext;
pub use error::{LeagueError, Result};
pub use league::*;
pub use model::*;

mod api;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod league;
pub mod model;
pub(crate) mod utils;
