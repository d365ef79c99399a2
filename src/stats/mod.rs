//! Baseball-stats payload: wire types and the HTTP loader.

pub mod http;
pub mod types;

pub use http::{parse_players_body, StatsClient};
pub use types::{PlayerId, PlayerStat};
