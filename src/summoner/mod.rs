//! The summoner enemy: patrol between waypoints, attack with runes.
//!
//! [`SummonerBrain`] is engine-independent. The host calls
//! [`SummonerBrain::tick`] once per simulation step with the summoner's
//! position and a view of its target, applies the returned
//! [`SummonerIntent`], and realises effect requests through an
//! [`EffectHost`](crate::sequence::EffectHost).

mod brain;
mod patrol;

pub use brain::{SummonerBrain, SummonerIntent, SummonerSettings, SummonerState};
pub use patrol::{PatrolPath, PatrolSettings};
