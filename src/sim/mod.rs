//! Bevy host for the summoner and fighter logic.
//!
//! The ECS owns positions, health, effect entities and time. Each frame the
//! [`SummonerPlugin`] systems feed that state to the engine-independent
//! brains and write their intents back as components.

mod clock;
mod events;
mod host;
mod plugin;
mod spawn;
mod systems;
mod view;

pub use clock::{sync_clock, ClockMode, SimulationClock};
pub use events::{
    DespawnSummoner, MeleeAttackRequested, SimulationError, SimulationErrorContext,
    SummonerAttackStarted,
};
pub use host::{CommandsEffectHost, EffectFilter, EffectTransforms};
pub use plugin::SummonerPlugin;
pub use spawn::{player_bundle, summoner_bundle};
pub use systems::{
    advance_fighter_timers, apply_damaging_effects, apply_movement, drive_summoners,
    update_facing,
};
pub use view::{ActorView, HealthTarget};
