//! Events exchanged between the host and the simulation.
use bevy::prelude::*;
use thiserror::Error;

/// Asks the attacker's [`FighterComp`](crate::components::FighterComp) to
/// strike `target`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeleeAttackRequested {
    /// Entity carrying the fighter.
    pub attacker: Entity,
    /// Entity to hit, if any.
    pub target: Option<Entity>,
}

/// Removes a summoner together with every effect it still owns.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DespawnSummoner {
    /// The summoner entity.
    pub entity: Entity,
}

/// Raised when a summoner starts a rune attack; a hook for animation.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummonerAttackStarted {
    /// The attacking summoner.
    pub summoner: Entity,
    /// The actor the attack is bound to.
    pub target: Entity,
}

/// Context carried by [`SimulationError`] events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationErrorContext {
    /// A melee request named an entity without a fighter.
    Melee,
    /// A despawn request named an entity that is not a summoner.
    Teardown,
}

/// Event raised when a simulation request cannot be honoured.
#[derive(Event, Debug, Clone, Error)]
#[error("{context:?}: {detail}")]
pub struct SimulationError {
    /// Where the failure occurred.
    pub context: SimulationErrorContext,
    /// Description of the failure.
    pub detail: String,
}

impl SimulationError {
    /// Convenience constructor used by observers to emit error events.
    #[must_use]
    pub fn new(context: SimulationErrorContext, detail: impl Into<String>) -> Self {
        Self {
            context,
            detail: detail.into(),
        }
    }
}
