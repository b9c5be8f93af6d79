//! Client-side shaping of fixture and result lists: grouping by season and
//! round, joining fixtures with their results, and list filtering.

pub mod combine;
pub mod filter;
pub mod grouping;

pub use combine::*;
pub use filter::*;
pub use grouping::*;
